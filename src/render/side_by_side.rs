//! Side-by-side layout: old lines on the left, new lines on the right.
//!
//! Rows are built first, then laid out, so the left column can be padded to
//! the widest left cell of the whole diff.
//!
//! ## Row alignment
//!
//! - Equal: the same line on both sides
//! - Delete: old line left, filler right
//! - Insert: filler left, new line right
//! - Replace: old and new lines paired in order; the longer side overflows
//!   against fillers. A paired row whose opcode was refined to words shows
//!   the changed words emphasized instead of the whole line.

use super::helpers::{elision, line_number, padding, text_width};
use super::theme::Category;
use super::{Presentation, RenderInput};
use crate::opcodes::OpKind;
use crate::words::{WordSpan, WordSpans};
use std::collections::HashMap;
use std::ops::Range;

const SEPARATOR: &str = " │ ";

/// One side (left or right) of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Side {
    /// 0-based line index, `None` for fillers.
    number: Option<usize>,

    /// Change marker: ` `, `-`, `+` or `~`.
    marker: char,

    /// Unstyled text, used for width computation.
    plain: String,

    /// Styled text as emitted.
    styled: String,
}

impl Side {
    fn new(number: usize, marker: char, plain: String, styled: String) -> Self {
        Self {
            number: Some(number),
            marker,
            plain,
            styled,
        }
    }

    /// Blank placeholder keeping the other side aligned.
    fn filler() -> Self {
        Self {
            number: None,
            marker: ' ',
            plain: String::new(),
            styled: String::new(),
        }
    }

    #[inline]
    fn is_filler(&self) -> bool {
        self.number.is_none()
    }
}

/// A laid-out line of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Pair { left: Side, right: Side },
    Elision(usize),
}

pub(super) fn render(input: &RenderInput<'_>, presentation: &Presentation<'_>) -> String {
    let rows = build_rows(input, presentation);

    let width = rows
        .iter()
        .filter_map(|row| match row {
            Row::Pair { left, .. } => Some(text_width(&left.plain)),
            Row::Elision(_) => None,
        })
        .chain(std::iter::once(text_width(input.old_label)))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let gutter_width = if input.show_line_numbers { 5 } else { 0 };
    let label_indent = " ".repeat(gutter_width + 2);
    out.push_str(&presentation.paint(
        Category::Metadata,
        &format!(
            "{label_indent}{}{}{SEPARATOR}{label_indent}{}",
            input.old_label,
            padding(text_width(input.old_label), width),
            input.new_label
        ),
    ));
    out.push('\n');

    for row in &rows {
        match row {
            Row::Elision(hidden) => {
                out.push_str(&presentation.paint(Category::Dim, &elision(*hidden)));
            }
            Row::Pair { left, right } => {
                push_side(&mut out, left, input.show_line_numbers, presentation);
                out.push_str(&padding(text_width(&left.plain), width));
                if right.is_filler() {
                    out.push_str(SEPARATOR.trim_end());
                } else {
                    out.push_str(SEPARATOR);
                    push_side(&mut out, right, input.show_line_numbers, presentation);
                }
            }
        }
        out.push('\n');
    }

    out
}

fn push_side(out: &mut String, side: &Side, show_line_numbers: bool, presentation: &Presentation<'_>) {
    if show_line_numbers {
        out.push_str(&presentation.paint(Category::Dim, &line_number(side.number)));
        out.push(' ');
    }
    out.push(side.marker);
    out.push(' ');
    out.push_str(&side.styled);
}

/// Aligns every hunk into rows.
fn build_rows(input: &RenderInput<'_>, presentation: &Presentation<'_>) -> Vec<Row> {
    // Refined line pairs keyed by old line index
    let refined: HashMap<usize, &WordSpans> = input
        .refinements
        .iter()
        .map(|r| (r.a_line, &r.spans))
        .collect();

    let mut rows = Vec::new();
    for hunk in input.hunks {
        if hunk.hidden_before > 0 {
            rows.push(Row::Elision(hunk.hidden_before));
        }

        for op in &hunk.opcodes {
            match op.kind {
                OpKind::Equal => {
                    for (i, j) in op.a.clone().zip(op.b.clone()) {
                        let old = &input.old[i];
                        let new = &input.new[j];
                        rows.push(Row::Pair {
                            left: Side::new(i, ' ', old.clone(), presentation.context_line(old, input.language)),
                            right: Side::new(j, ' ', new.clone(), presentation.context_line(new, input.language)),
                        });
                    }
                }
                OpKind::Delete => {
                    for i in op.a.clone() {
                        rows.push(Row::Pair {
                            left: whole_line(i, '-', &input.old[i], Category::Deletion, presentation),
                            right: Side::filler(),
                        });
                    }
                }
                OpKind::Insert => {
                    for j in op.b.clone() {
                        rows.push(Row::Pair {
                            left: Side::filler(),
                            right: whole_line(j, '+', &input.new[j], Category::Addition, presentation),
                        });
                    }
                }
                OpKind::Replace => {
                    let pairs = op.a.len().max(op.b.len());
                    for k in 0..pairs {
                        let i = (k < op.a.len()).then(|| op.a.start + k);
                        let j = (k < op.b.len()).then(|| op.b.start + k);

                        let row = match (i, j, i.and_then(|i| refined.get(&i))) {
                            (Some(i), Some(j), Some(spans)) => {
                                let (left, right) =
                                    word_sides((i, &input.old[i]), (j, &input.new[j]), spans, presentation);
                                Row::Pair { left, right }
                            }
                            _ => Row::Pair {
                                left: i.map_or_else(Side::filler, |i| {
                                    whole_line(i, '~', &input.old[i], Category::Deletion, presentation)
                                }),
                                right: j.map_or_else(Side::filler, |j| {
                                    whole_line(j, '~', &input.new[j], Category::Addition, presentation)
                                }),
                            },
                        };
                        rows.push(row);
                    }
                }
            }
        }
    }

    rows
}

/// A side whose entire text carries one category.
fn whole_line(number: usize, marker: char, text: &str, category: Category, presentation: &Presentation<'_>) -> Side {
    Side::new(number, marker, text.to_string(), presentation.paint(category, text))
}

/// Both sides of a refined pair. The lines are shown as they are; only the
/// byte ranges of changed words are emphasized.
fn word_sides(
    (i, old): (usize, &str),
    (j, new): (usize, &str),
    spans: &[WordSpan],
    presentation: &Presentation<'_>,
) -> (Side, Side) {
    let changed = || spans.iter().filter(|span| span.kind != OpKind::Equal);
    let left = emphasize(
        old,
        changed().map(|span| span.a_bytes.clone()),
        Category::DeletionEmphasis,
        presentation,
    );
    let right = emphasize(
        new,
        changed().map(|span| span.b_bytes.clone()),
        Category::AdditionEmphasis,
        presentation,
    );

    (
        Side::new(i, '~', old.to_string(), left),
        Side::new(j, '~', new.to_string(), right),
    )
}

/// `line` with each of the ascending, non-overlapping `ranges` painted.
fn emphasize(
    line: &str,
    ranges: impl Iterator<Item = Range<usize>>,
    category: Category,
    presentation: &Presentation<'_>,
) -> String {
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;
    for range in ranges.filter(|range| !range.is_empty()) {
        out.push_str(&line[cursor..range.start]);
        out.push_str(&presentation.paint(category, &line[range.clone()]));
        cursor = range.end;
    }
    out.push_str(&line[cursor..]);
    out
}
