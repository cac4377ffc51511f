//! Unified layout: one column, `-`/`+`/` ` markers, `@@` hunk headers.

use super::helpers::{elision, gutter, unified_range};
use super::theme::Category;
use super::{Presentation, RenderInput};
use crate::opcodes::OpKind;

pub(super) fn render(input: &RenderInput<'_>, presentation: &Presentation<'_>) -> String {
    let mut out = String::new();

    push_line(&mut out, presentation.paint(Category::Metadata, &format!("--- {}", input.old_label)));
    push_line(&mut out, presentation.paint(Category::Metadata, &format!("+++ {}", input.new_label)));

    for hunk in input.hunks {
        if hunk.hidden_before > 0 {
            push_line(&mut out, presentation.paint(Category::Dim, &elision(hunk.hidden_before)));
        }

        let header = format!(
            "@@ -{} +{} @@",
            unified_range(&hunk.a_range()),
            unified_range(&hunk.b_range())
        );
        push_line(&mut out, presentation.paint(Category::Metadata, &header));

        for op in &hunk.opcodes {
            match op.kind {
                OpKind::Equal => {
                    for (i, j) in op.a.clone().zip(op.b.clone()) {
                        let line = presentation.context_line(&input.old[i], input.language);
                        push_row(&mut out, input, presentation, Some(i), Some(j), format!(" {line}"));
                    }
                }
                OpKind::Delete | OpKind::Insert | OpKind::Replace => {
                    for i in op.a.clone() {
                        let line = presentation.paint(Category::Deletion, &format!("-{}", input.old[i]));
                        push_row(&mut out, input, presentation, Some(i), None, line);
                    }
                    for j in op.b.clone() {
                        let line = presentation.paint(Category::Addition, &format!("+{}", input.new[j]));
                        push_row(&mut out, input, presentation, None, Some(j), line);
                    }
                }
            }
        }
    }

    out
}

#[inline]
fn push_line(out: &mut String, line: String) {
    out.push_str(&line);
    out.push('\n');
}

/// Appends one content row, prefixed by the line-number gutter when enabled.
fn push_row(
    out: &mut String,
    input: &RenderInput<'_>,
    presentation: &Presentation<'_>,
    old: Option<usize>,
    new: Option<usize>,
    content: String,
) {
    if input.show_line_numbers {
        out.push_str(&presentation.paint(Category::Dim, &gutter(old, new)));
    }
    push_line(out, content);
}
