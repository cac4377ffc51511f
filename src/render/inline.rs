//! Inline layout: a compact single column where each replaced line shows its
//! old and new text at the same position, as `[-old-]{+new+}`.

use super::helpers::{elision, gutter};
use super::theme::Category;
use super::{Presentation, RenderInput};
use crate::opcodes::OpKind;

pub(super) fn render(input: &RenderInput<'_>, presentation: &Presentation<'_>) -> String {
    let mut out = String::new();
    let banner = format!("{} → {}", input.old_label, input.new_label);
    out.push_str(&presentation.paint(Category::Metadata, &banner));
    out.push('\n');

    for hunk in input.hunks {
        if hunk.hidden_before > 0 {
            out.push_str(&presentation.paint(Category::Dim, &elision(hunk.hidden_before)));
            out.push('\n');
        }

        for op in &hunk.opcodes {
            match op.kind {
                OpKind::Equal => {
                    for (i, j) in op.a.clone().zip(op.b.clone()) {
                        let line = presentation.context_line(&input.old[i], input.language);
                        push_row(&mut out, input, presentation, Some(i), Some(j), format!("  {line}"));
                    }
                }
                OpKind::Delete => {
                    for i in op.a.clone() {
                        push_deleted(&mut out, input, presentation, i);
                    }
                }
                OpKind::Insert => {
                    for j in op.b.clone() {
                        push_inserted(&mut out, input, presentation, j);
                    }
                }
                OpKind::Replace => {
                    let paired = op.a.len().min(op.b.len());
                    for (i, j) in op.a.clone().zip(op.b.clone()) {
                        let line = format!(
                            "{}{}{}",
                            presentation.paint(Category::Modification, "~ "),
                            presentation.paint(Category::Deletion, &format!("[-{}-]", input.old[i])),
                            presentation.paint(Category::Addition, &format!("{{+{}+}}", input.new[j])),
                        );
                        push_row(&mut out, input, presentation, Some(i), Some(j), line);
                    }
                    for i in op.a.clone().skip(paired) {
                        push_deleted(&mut out, input, presentation, i);
                    }
                    for j in op.b.clone().skip(paired) {
                        push_inserted(&mut out, input, presentation, j);
                    }
                }
            }
        }
    }

    out
}

fn push_deleted(out: &mut String, input: &RenderInput<'_>, presentation: &Presentation<'_>, i: usize) {
    let line = presentation.paint(Category::Deletion, &format!("- {}", input.old[i]));
    push_row(out, input, presentation, Some(i), None, line);
}

fn push_inserted(out: &mut String, input: &RenderInput<'_>, presentation: &Presentation<'_>, j: usize) {
    let line = presentation.paint(Category::Addition, &format!("+ {}", input.new[j]));
    push_row(out, input, presentation, None, Some(j), line);
}

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
    out.push_str(&content);
    out.push('\n');
}
