//! Statistics-only layout. Ignores hunks entirely.

use super::helpers::group_thousands;
use super::theme::Category;
use super::{Presentation, RenderInput};

const LABEL_WIDTH: usize = 16;
const BAR: &str = "█";

pub(super) fn render(input: &RenderInput<'_>, presentation: &Presentation<'_>) -> String {
    let stats = input.stats;
    let mut out = String::new();

    let title = format!("Diff Statistics: {} ↔ {}", input.old_label, input.new_label);
    out.push_str(&presentation.paint(Category::Metadata, &title));
    out.push_str("\n\n");

    let rows = [
        ("File A lines", group_thousands(stats.lines_a), None),
        ("File B lines", group_thousands(stats.lines_b), None),
        ("Additions", group_thousands(stats.additions), Some(Category::Addition)),
        ("Deletions", group_thousands(stats.deletions), Some(Category::Deletion)),
        ("Modifications", group_thousands(stats.modifications), Some(Category::Modification)),
        ("Total changes", group_thousands(stats.total_changes), None),
        ("Similarity", format!("{:.1}%", stats.similarity_percent()), None),
    ];
    for (label, value, category) in rows {
        let value = match category {
            Some(category) => presentation.paint(category, &value),
            None => value,
        };
        out.push_str(&format!("  {label:<LABEL_WIDTH$}{value}\n"));
    }

    if stats.total_changes > 0 {
        let dist = stats.distribution();
        out.push('\n');
        out.push_str(&presentation.paint(Category::Metadata, "Change Distribution:"));
        out.push('\n');
        for (marker, width, count, category) in [
            ('+', dist.additions, stats.additions, Category::Addition),
            ('-', dist.deletions, stats.deletions, Category::Deletion),
            ('~', dist.modifications, stats.modifications, Category::Modification),
        ] {
            let bar = presentation.paint(category, &format!("{marker} {}", BAR.repeat(width)));
            out.push_str(&format!("{bar} {count}\n"));
        }
    }

    out
}
