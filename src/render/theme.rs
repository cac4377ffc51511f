//! Presentation categories and their mapping to terminal styles.
//!
//! Renderers only ever name a [`Category`]; the [`Theme`] decides what that
//! looks like. Swapping [`Theme::ansi`] for [`Theme::plain`] turns color off
//! without touching opcodes, hunks, or layout.

use console::Style;

/// What a piece of rendered text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Addition,
    Deletion,
    Modification,
    /// Headers, labels, hunk ranges.
    Metadata,
    /// Line numbers, elision markers, summaries.
    Dim,
    /// Changed words inside a refined new line.
    AdditionEmphasis,
    /// Changed words inside a refined old line.
    DeletionEmphasis,
}

impl Category {
    const COUNT: usize = 7;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Default styles, in [`Category`] order. Styling is forced on each style so
/// output does not depend on whether the process writes to a terminal.
fn ansi_styles() -> [Style; Category::COUNT] {
    [
        Style::new().green(),
        Style::new().red(),
        Style::new().yellow(),
        Style::new().cyan().bold(),
        Style::new().dim(),
        Style::new().green().bold().on_color256(22),
        Style::new().red().bold().on_color256(52),
    ]
    .map(|style| style.force_styling(true))
}

/// Maps categories to styles. `None` means plain text.
#[derive(Debug, Clone)]
pub struct Theme {
    styles: Option<[Style; Category::COUNT]>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Theme {
    /// 16/256-color ANSI styling.
    pub fn ansi() -> Self {
        Self {
            styles: Some(ansi_styles()),
        }
    }

    /// No styling at all, for pipes and files.
    pub const fn plain() -> Self {
        Self { styles: None }
    }

    /// [`Theme::ansi`] when `color` is set, otherwise [`Theme::plain`].
    pub fn for_color(color: bool) -> Self {
        if color { Self::ansi() } else { Self::plain() }
    }

    /// Replaces the style of one category. No-op on a plain theme.
    #[must_use]
    pub fn with_style(mut self, category: Category, style: Style) -> Self {
        if let Some(styles) = self.styles.as_mut() {
            styles[category.index()] = style.force_styling(true);
        }
        self
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.styles.is_none()
    }

    /// Wraps `text` in the style of `category`.
    pub fn paint(&self, category: Category, text: &str) -> String {
        match &self.styles {
            Some(styles) if !text.is_empty() => styles[category.index()].apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    #[test]
    fn plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert!(theme.is_plain());
        assert_eq!(theme.paint(Category::Addition, "+x"), "+x");
    }

    #[test]
    fn ansi_theme_wraps_text() {
        let theme = Theme::ansi();
        let painted = theme.paint(Category::Deletion, "-x");
        assert!(painted.starts_with('\x1b'));
        assert_ne!(painted, "-x");
        assert_eq!(strip_ansi_codes(&painted), "-x");
        assert_eq!(theme.paint(Category::Metadata, ""), "");
    }

    #[test]
    fn categories_are_distinct() {
        let theme = Theme::ansi();
        let addition = theme.paint(Category::Addition, "x");
        let deletion = theme.paint(Category::Deletion, "x");
        let emphasis = theme.paint(Category::AdditionEmphasis, "x");
        assert_ne!(addition, deletion);
        assert_ne!(addition, emphasis);
    }

    #[test]
    fn override_one_category() {
        let theme = Theme::ansi().with_style(Category::Addition, Style::new().blue());
        assert_eq!(
            theme.paint(Category::Addition, "a"),
            Style::new().blue().force_styling(true).apply_to("a").to_string()
        );
        assert_eq!(
            theme.paint(Category::Deletion, "d"),
            Theme::ansi().paint(Category::Deletion, "d")
        );
        assert!(Theme::plain().with_style(Category::Addition, Style::new().blue()).is_plain());
    }
}
