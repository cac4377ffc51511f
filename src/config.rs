//! Configuration for a comparison.
//!
//! [`DiffOptions`] is the caller-facing shape: every field has a default and
//! the struct deserializes from JSON, mirroring the flag set of a command-line
//! front end (one boolean per view mode). [`DiffOptions::resolve`] checks it
//! and produces [`ResolvedOptions`], which the pipeline consumes.

use crate::error::{DiffError, Result};
use serde::{Deserialize, Serialize};

/// Default number of unchanged lines shown around each change.
pub const DEFAULT_CONTEXT: i64 = 3;

/// Output layout. Exactly one is active per comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Unified,
    SideBySide,
    Inline,
    Stats,
}

/// How replace opcodes contribute to the `modifications` count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationWeighting {
    /// `max(a_len, b_len)` per replace opcode.
    #[default]
    Lines,
    /// One per replace opcode.
    Blocks,
}

/// Caller-supplied options, validated by [`DiffOptions::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Unchanged lines kept around each change. Signed so that a bad value
    /// coming from a config file or command line is reported, not wrapped.
    pub context: i64,

    pub ignore_whitespace: bool,

    pub ignore_case: bool,

    /// Word-level highlighting inside single-line replacements.
    /// Only defined for the side-by-side view.
    pub word_diff: bool,

    pub side_by_side: bool,

    pub inline: bool,

    pub stats: bool,

    pub show_line_numbers: bool,

    /// Use the ANSI theme. When false every presentation category renders
    /// as plain text.
    pub color: bool,

    /// Skip rendering entirely; the result still carries equality and stats.
    pub quiet: bool,

    /// Language tag handed to the syntax highlighter. Detected from
    /// `old_label` when absent.
    pub language: Option<String>,

    pub old_label: String,

    pub new_label: String,

    pub modification_weighting: ModificationWeighting,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self {
            context: DEFAULT_CONTEXT,
            ignore_whitespace: false,
            ignore_case: false,
            word_diff: false,
            side_by_side: false,
            inline: false,
            stats: false,
            show_line_numbers: false,
            color: true,
            quiet: false,
            language: None,
            old_label: "a".to_string(),
            new_label: "b".to_string(),
            modification_weighting: ModificationWeighting::default(),
        }
    }

    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_context(mut self, context: i64) -> Self {
        self.context = context;
        self
    }

    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    pub fn with_word_diff(mut self, enable: bool) -> Self {
        self.word_diff = enable;
        self
    }

    /// Select a single view mode, clearing the other selectors.
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.side_by_side = view == ViewMode::SideBySide;
        self.inline = view == ViewMode::Inline;
        self.stats = view == ViewMode::Stats;
        self
    }

    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_labels(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.old_label = old.into();
        self.new_label = new.into();
        self
    }

    pub fn with_modification_weighting(mut self, weighting: ModificationWeighting) -> Self {
        self.modification_weighting = weighting;
        self
    }

    /// Validate the options and collapse the view selectors into one mode.
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let context = usize::try_from(self.context).map_err(|_| {
            DiffError::InvalidConfiguration(format!(
                "context must be non-negative, got {}",
                self.context
            ))
        })?;

        let selected: Vec<ViewMode> = [
            (self.side_by_side, ViewMode::SideBySide),
            (self.inline, ViewMode::Inline),
            (self.stats, ViewMode::Stats),
        ]
        .into_iter()
        .filter_map(|(on, mode)| on.then_some(mode))
        .collect();

        let view_mode = match selected.as_slice() {
            [] => ViewMode::Unified,
            [mode] => *mode,
            modes => {
                return Err(DiffError::InvalidConfiguration(format!(
                    "view modes are mutually exclusive, got {modes:?}"
                )));
            }
        };

        if self.word_diff && view_mode != ViewMode::SideBySide {
            return Err(DiffError::UnsupportedOperation(format!(
                "word-level highlighting requires the side-by-side view, not {view_mode:?}"
            )));
        }

        Ok(ResolvedOptions {
            context,
            view_mode,
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
            word_diff: self.word_diff,
            show_line_numbers: self.show_line_numbers,
            color: self.color,
            quiet: self.quiet,
            language: self.language.clone(),
            old_label: self.old_label.clone(),
            new_label: self.new_label.clone(),
            modification_weighting: self.modification_weighting,
        })
    }
}

/// Options after validation. Produced only by [`DiffOptions::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub context: usize,
    pub view_mode: ViewMode,
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub word_diff: bool,
    pub show_line_numbers: bool,
    pub color: bool,
    pub quiet: bool,
    pub language: Option<String>,
    pub old_label: String,
    pub new_label: String,
    pub modification_weighting: ModificationWeighting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_unified() {
        let resolved = DiffOptions::default().resolve().unwrap();
        assert_eq!(resolved.context, 3);
        assert_eq!(resolved.view_mode, ViewMode::Unified);
        assert!(resolved.color);
        assert_eq!(resolved.old_label, "a");
    }

    #[test]
    fn negative_context_is_invalid() {
        let err = DiffOptions::new().with_context(-1).resolve().unwrap_err();
        assert!(matches!(err, DiffError::InvalidConfiguration(_)));
    }

    #[test]
    fn two_view_modes_are_invalid() {
        let mut options = DiffOptions::new();
        options.side_by_side = true;
        options.stats = true;
        let err = options.resolve().unwrap_err();
        assert!(matches!(err, DiffError::InvalidConfiguration(_)));
    }

    #[test]
    fn word_diff_outside_side_by_side_is_unsupported() {
        let err = DiffOptions::new()
            .with_word_diff(true)
            .with_view(ViewMode::Inline)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, DiffError::UnsupportedOperation(_)));

        let err = DiffOptions::new().with_word_diff(true).resolve().unwrap_err();
        assert!(matches!(err, DiffError::UnsupportedOperation(_)));
    }

    #[test]
    fn word_diff_with_side_by_side_resolves() {
        let resolved = DiffOptions::new()
            .with_word_diff(true)
            .with_view(ViewMode::SideBySide)
            .resolve()
            .unwrap();
        assert_eq!(resolved.view_mode, ViewMode::SideBySide);
        assert!(resolved.word_diff);
    }

    #[test]
    fn with_view_clears_other_selectors() {
        let options = DiffOptions::new()
            .with_view(ViewMode::Stats)
            .with_view(ViewMode::Inline);
        assert!(options.inline);
        assert!(!options.stats);
        assert_eq!(options.resolve().unwrap().view_mode, ViewMode::Inline);
    }

    #[test]
    fn parse_partial_json() {
        let options = DiffOptions::from_json(
            r#"{"context": 1, "ignore_case": true, "side_by_side": true, "modification_weighting": "blocks"}"#,
        )
        .unwrap();
        assert_eq!(options.context, 1);
        assert!(options.ignore_case);
        assert!(options.side_by_side);
        assert!(options.color);
        assert_eq!(options.modification_weighting, ModificationWeighting::Blocks);
    }

    #[test]
    fn parse_malformed_json() {
        let err = DiffOptions::from_json("{context: }").unwrap_err();
        assert!(matches!(err, DiffError::Serialization(_)));
    }
}
