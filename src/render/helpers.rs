//! Gutter, padding and number formatting shared by the renderers.

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Width of one line-number column.
pub(super) const NUMBER_WIDTH: usize = 4;

/// Old and new line-number columns. Numbers are 0-based indices rendered
/// 1-based; `None` leaves the column blank.
pub(super) fn gutter(old: Option<usize>, new: Option<usize>) -> String {
    format!("{} {} ", line_number(old), line_number(new))
}

/// One right-aligned line-number column.
pub(super) fn line_number(index: Option<usize>) -> String {
    match index {
        Some(i) => format!("{:>NUMBER_WIDTH$}", i + 1),
        None => " ".repeat(NUMBER_WIDTH),
    }
}

/// Terminal cells taken by unstyled text. Wide (CJK) characters count twice.
#[inline]
pub(super) fn text_width(s: &str) -> usize {
    s.width()
}

/// Spaces needed to pad text of width `used` out to `width`.
#[inline]
pub(super) fn padding(used: usize, width: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

/// `1234567` → `"1,234,567"`.
pub(super) fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Range in unified hunk-header form: 1-based start, count omitted when
/// one, start pulled back by one for empty ranges.
pub(super) fn unified_range(range: &Range<usize>) -> String {
    let start = range.start + 1;
    match range.len() {
        0 => format!("{},0", start - 1),
        1 => format!("{start}"),
        len => format!("{start},{len}"),
    }
}

/// Summary line for a run of hidden unchanged lines.
pub(super) fn elision(hidden: usize) -> String {
    let noun = if hidden == 1 { "line" } else { "lines" };
    format!("... {hidden} unchanged {noun} hidden ...")
}
