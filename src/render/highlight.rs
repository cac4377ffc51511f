//! Syntax highlighting seam.
//!
//! Tokenizing and coloring source code is left to the embedding application.
//! Renderers call the highlighter on unchanged lines when a language tag is
//! known and the theme is not plain.

/// Colors one line of source in the given language.
///
/// Implementations must be `Send + Sync` so one highlighter can serve a
/// parallel batch of comparisons.
pub trait SyntaxHighlighter: Send + Sync {
    fn highlight(&self, line: &str, language: &str) -> String;
}

/// Returns lines unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight(&self, line: &str, _language: &str) -> String {
        line.to_string()
    }
}
