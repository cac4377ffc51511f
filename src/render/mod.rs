//! Text layouts for a finished comparison.
//!
//! Four layouts share one input: the context-windowed hunks, the word
//! refinements and the stats. The layout is picked by [`ViewMode`], a closed
//! set matched in [`render`].
//!
//! Sub-modules:
//! - [`theme`] - presentation categories and their styles
//! - [`highlight`] - the syntax-highlighter seam
//! - `unified`, `side_by_side`, `inline`, `stats` - one layout each
//! - `helpers` - gutters, padding and number formatting

pub mod highlight;
pub mod theme;

mod helpers;
mod inline;
mod side_by_side;
mod stats;
mod unified;

use crate::config::ViewMode;
use crate::stats::Stats;
use crate::window::Hunk;
use crate::words::LineRefinement;
use highlight::SyntaxHighlighter;
use theme::{Category, Theme};

pub use highlight::PlainHighlighter;

/// Message shown instead of a diff when nothing changed.
pub const IDENTICAL_MESSAGE: &str = "✓ Files are identical";

/// Everything a layout needs. Borrowed from the comparison result.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub old: &'a [String],
    pub new: &'a [String],
    pub hunks: &'a [Hunk],
    pub stats: &'a Stats,
    pub refinements: &'a [LineRefinement],
    pub old_label: &'a str,
    pub new_label: &'a str,
    pub language: Option<&'a str>,
    pub show_line_numbers: bool,
}

/// Theme plus highlighter.
#[derive(Clone, Copy)]
pub struct Presentation<'a> {
    pub theme: &'a Theme,
    pub highlighter: &'a dyn SyntaxHighlighter,
}

impl<'a> Presentation<'a> {
    pub fn new(theme: &'a Theme, highlighter: &'a dyn SyntaxHighlighter) -> Self {
        Self { theme, highlighter }
    }

    #[inline]
    pub(crate) fn paint(&self, category: Category, text: &str) -> String {
        self.theme.paint(category, text)
    }

    /// An unchanged line, syntax-highlighted when a language is known and
    /// color is on.
    pub(crate) fn context_line(&self, line: &str, language: Option<&str>) -> String {
        match language {
            Some(language) if !self.theme.is_plain() => self.highlighter.highlight(line, language),
            _ => line.to_string(),
        }
    }
}

/// Renders `input` in the selected layout.
///
/// Every layout except [`ViewMode::Stats`] prints [`IDENTICAL_MESSAGE`] when
/// there are no changes, and otherwise ends with a one-line change summary.
pub fn render(view: ViewMode, input: &RenderInput<'_>, presentation: &Presentation<'_>) -> String {
    let body = match view {
        ViewMode::Stats => return stats::render(input, presentation),
        _ if input.stats.total_changes == 0 => {
            return format!("{}\n", presentation.paint(Category::Addition, IDENTICAL_MESSAGE));
        }
        ViewMode::Unified => unified::render(input, presentation),
        ViewMode::SideBySide => side_by_side::render(input, presentation),
        ViewMode::Inline => inline::render(input, presentation),
    };

    format!("{body}\n{}\n", summary_line(input.stats, presentation))
}

/// `Changes: +A -D ~M | Similarity: S%`
fn summary_line(stats: &Stats, presentation: &Presentation<'_>) -> String {
    format!(
        "{} {} {} {} {}",
        presentation.paint(Category::Dim, "Changes:"),
        presentation.paint(Category::Addition, &format!("+{}", stats.additions)),
        presentation.paint(Category::Deletion, &format!("-{}", stats.deletions)),
        presentation.paint(Category::Modification, &format!("~{}", stats.modifications)),
        presentation.paint(
            Category::Dim,
            &format!("| Similarity: {:.1}%", stats.similarity_percent())
        ),
    )
}


#[cfg(test)]
mod tests {
    use super::test_support::{Fixture, plain};
    use super::*;
    use console::strip_ansi_codes;

    struct Shouty;

    impl SyntaxHighlighter for Shouty {
        fn highlight(&self, line: &str, _language: &str) -> String {
            line.to_uppercase()
        }
    }

    #[test]
    fn identical_inputs_render_message() {
        let fixture = Fixture::new(&["a", "b"], &["a", "b"], 3);
        let out = render(ViewMode::Unified, &fixture.input(false), &plain());
        assert_eq!(out, format!("{IDENTICAL_MESSAGE}\n"));
    }

    #[test]
    fn summary_line_is_appended() {
        let fixture = Fixture::new(&["a", "b", "c"], &["a", "x", "c"], 3);
        for view in [ViewMode::Unified, ViewMode::SideBySide, ViewMode::Inline] {
            let out = render(view, &fixture.input(false), &plain());
            assert!(
                out.ends_with("Changes: +1 -1 ~1 | Similarity: 66.7%\n"),
                "{view:?}: {out}"
            );
        }
    }

    #[test]
    fn stats_view_has_no_summary_line() {
        let fixture = Fixture::new(&["a", "b", "c"], &["a", "x", "c"], 3);
        let out = render(ViewMode::Stats, &fixture.input(false), &plain());
        assert!(!out.contains("Changes:"));
    }

    #[test]
    fn highlighter_only_runs_with_color_and_language() {
        let ansi = Theme::ansi();
        let colored = Presentation::new(&ansi, &Shouty);
        assert_eq!(colored.context_line("let x", Some("rust")), "LET X");
        assert_eq!(colored.context_line("let x", None), "let x");

        let plain_theme = Theme::plain();
        let uncolored = Presentation::new(&plain_theme, &Shouty);
        assert_eq!(uncolored.context_line("let x", Some("rust")), "let x");
    }

    #[test]
    fn theme_swap_changes_only_styling() {
        let fixture = Fixture::new(&["a", "b", "c"], &["a", "x", "c"], 3);
        let ansi = Theme::ansi();
        let colored = render(
            ViewMode::Unified,
            &fixture.input(false),
            &Presentation::new(&ansi, &PlainHighlighter),
        );
        let uncolored = render(ViewMode::Unified, &fixture.input(false), &plain());
        assert!(colored.contains('\x1b'));
        assert!(!uncolored.contains('\x1b'));
        assert_eq!(strip_ansi_codes(&colored), uncolored);
    }
}
