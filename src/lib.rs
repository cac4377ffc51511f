//! # diffplus
//!
//! Line-oriented text comparison with four text layouts.
//!
//! Two texts are split into lines and compared with a longest-matching-block
//! matcher. The matching blocks become an edit script of opcodes, which feeds
//! the statistics, the context windower and, for single-line replacements,
//! a word-level refiner. The result can be rendered as a unified diff, a
//! side-by-side view, an inline view, or a statistics table.
//!
//! ## Architecture
//!
//! - `normalize` - Comparison keys (whitespace and case relaxations)
//! - `matcher` - Matching blocks with popular-element suppression
//! - `opcodes` - Edit script built from the matching blocks
//! - `words` - Word-level refinement of replaced lines
//! - `stats` - Change counts and similarity
//! - `window` - Context-bounded hunks
//! - `render` - The four layouts, themes and the highlighter seam
//! - `lib` (this module) - The pipeline and the parallel batch driver
//!
//! ## Usage
//!
//! ```
//! use diffplus::{DiffOptions, ViewMode, compare};
//!
//! let options = DiffOptions::new()
//!     .with_view(ViewMode::SideBySide)
//!     .with_color(false)
//!     .with_labels("old.txt", "new.txt");
//! let result = compare("a\nb\nc\n", "a\nx\nc\n", &options).unwrap();
//!
//! assert!(!result.equal);
//! assert_eq!(result.stats.modifications, 1);
//! assert_eq!(result.exit_code(), 1);
//! ```

use log::debug;
use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod language;
pub mod matcher;
pub mod normalize;
pub mod opcodes;
pub mod render;
pub mod result;
pub mod stats;
pub mod window;
pub mod words;

pub use config::{DiffOptions, ModificationWeighting, ResolvedOptions, ViewMode};
pub use error::{DiffError, Result};
pub use language::detect_language;
pub use render::PlainHighlighter;
pub use render::highlight::SyntaxHighlighter;
pub use render::theme::{Category, Theme};
pub use result::{ComparisonResult, EXIT_INPUT_FAILURE};

use normalize::Normalizer;
use render::{Presentation, RenderInput};

/// Splits text into lines without their terminators. `\r\n` and a trailing
/// `\r` are both stripped.
#[inline]
pub fn into_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Compares two texts and renders the result in the configured layout.
pub fn compare(old: &str, new: &str, options: &DiffOptions) -> Result<ComparisonResult> {
    compare_with(old, new, options, &PlainHighlighter)
}

/// Like [`compare`], coloring unchanged lines with `highlighter`.
pub fn compare_with(
    old: &str,
    new: &str,
    options: &DiffOptions,
    highlighter: &dyn SyntaxHighlighter,
) -> Result<ComparisonResult> {
    let options = options.resolve()?;
    Ok(compare_lines(&into_lines(old), &into_lines(new), &options, highlighter))
}

/// The pipeline over already split lines. Infallible once options are
/// resolved.
pub fn compare_lines(
    old: &[String],
    new: &[String],
    options: &ResolvedOptions,
    highlighter: &dyn SyntaxHighlighter,
) -> ComparisonResult {
    let normalizer = Normalizer::new(options.ignore_whitespace, options.ignore_case);
    let blocks = {
        let old_keys = normalizer.keys(old);
        let new_keys = normalizer.keys(new);
        matcher::matching_blocks(&old_keys, &new_keys)
    };
    let opcodes = opcodes::build(&blocks);

    let refinements = if options.word_diff {
        words::refine_replacements(&opcodes, old, new)
    } else {
        Vec::new()
    };

    let hunks = match options.view_mode {
        ViewMode::Stats => Vec::new(),
        _ => window::window(&opcodes, options.context),
    };

    let stats = stats::aggregate(
        &opcodes,
        &blocks,
        old.len(),
        new.len(),
        options.modification_weighting,
    );

    let language = options
        .language
        .clone()
        .or_else(|| detect_language(&options.old_label).map(String::from));

    debug!(
        "compared {} vs {}: {} vs {} lines, {} opcodes, {} hunks, similarity {:.3}",
        options.old_label,
        options.new_label,
        old.len(),
        new.len(),
        opcodes.len(),
        hunks.len(),
        stats.similarity_ratio
    );

    let rendered_text = if options.quiet {
        String::new()
    } else {
        let theme = Theme::for_color(options.color);
        let input = RenderInput {
            old,
            new,
            hunks: &hunks,
            stats: &stats,
            refinements: &refinements,
            old_label: &options.old_label,
            new_label: &options.new_label,
            language: language.as_deref(),
            show_line_numbers: options.show_line_numbers,
        };
        render::render(options.view_mode, &input, &Presentation::new(&theme, highlighter))
    };

    ComparisonResult {
        equal: opcodes.iter().all(|op| !op.is_change()),
        identical: old == new,
        stats,
        opcodes,
        hunks,
        refinements,
        language,
        rendered_text,
    }
}

/// One pair of texts in a batch. The labels replace the option labels for
/// this pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub old_label: String,
    pub old_text: String,
    pub new_label: String,
    pub new_text: String,
}

impl FilePair {
    pub fn new(
        old_label: impl Into<String>,
        old_text: impl Into<String>,
        new_label: impl Into<String>,
        new_text: impl Into<String>,
    ) -> Self {
        Self {
            old_label: old_label.into(),
            old_text: old_text.into(),
            new_label: new_label.into(),
            new_text: new_text.into(),
        }
    }
}

/// Compares every pair in parallel. Results keep the input order.
pub fn compare_many(pairs: Vec<FilePair>, options: &DiffOptions) -> Vec<Result<ComparisonResult>> {
    compare_many_with(pairs, options, &PlainHighlighter)
}

/// Like [`compare_many`], sharing one highlighter across the workers.
pub fn compare_many_with(
    pairs: Vec<FilePair>,
    options: &DiffOptions,
    highlighter: &dyn SyntaxHighlighter,
) -> Vec<Result<ComparisonResult>> {
    debug!("comparing {} file pairs", pairs.len());
    pairs
        .into_par_iter()
        .map(|pair| {
            let FilePair {
                old_label,
                old_text,
                new_label,
                new_text,
            } = pair;
            let options = options.clone().with_labels(old_label, new_label);
            compare_with(&old_text, &new_text, &options, highlighter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::OpKind;

    fn plain() -> DiffOptions {
        DiffOptions::new().with_color(false)
    }

    fn kinds(result: &ComparisonResult) -> Vec<OpKind> {
        result.opcodes.iter().map(|op| op.kind).collect()
    }

    #[test]
    fn test_into_lines_with_content() {
        let lines = into_lines("line1\nline2\nline3");
        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_into_lines_empty() {
        assert!(into_lines("").is_empty());
    }

    #[test]
    fn test_into_lines_strips_carriage_returns() {
        let lines = into_lines("a\r\nb\r\nc\r");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_into_lines_trailing_newline() {
        assert_eq!(into_lines("single\n"), vec!["single"]);
    }

    #[test]
    fn test_single_replacement() {
        let result = compare("a\nb\nc", "a\nx\nc", &plain()).unwrap();
        assert_eq!(kinds(&result), vec![OpKind::Equal, OpKind::Replace, OpKind::Equal]);
        assert_eq!(result.stats.additions, 1);
        assert_eq!(result.stats.deletions, 1);
        assert_eq!(result.stats.modifications, 1);
        assert!((result.stats.similarity_ratio - 4.0 / 6.0).abs() < 1e-9);
        assert!(!result.equal);
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_delete_run_with_context_one() {
        let options = plain().with_context(1);
        let result = compare("1\n2\n3\n4\n5", "1\n5", &options).unwrap();
        assert_eq!(kinds(&result), vec![OpKind::Equal, OpKind::Delete, OpKind::Equal]);
        assert_eq!(result.hunks.len(), 1);
        assert_eq!(result.hunks[0].hidden_before, 0);
        assert_eq!(result.hunks[0].opcodes, result.opcodes);
    }

    #[test]
    fn test_ignore_case_makes_equal() {
        let options = plain().with_ignore_case(true);
        let result = compare("Config", "config", &options).unwrap();
        assert!(result.equal);
        assert!(!result.identical);
        assert_eq!(result.stats.similarity_ratio, 1.0);
        assert_eq!(result.exit_code(), 0);
        assert_eq!(result.rendered_text, format!("{}\n", render::IDENTICAL_MESSAGE));
    }

    #[test]
    fn test_normalization_keeps_original_text_in_output() {
        let options = plain().with_ignore_case(true).with_view(ViewMode::SideBySide);
        let result = compare("Foo\nbar", "foo\nbaz", &options).unwrap();
        let lines: Vec<&str> = result.rendered_text.lines().collect();
        assert_eq!(lines[1], "  Foo │   foo");
        assert_eq!(lines[2], "~ bar │ ~ baz");
    }

    #[test]
    fn test_ignore_whitespace_collapses_runs() {
        let options = plain().with_ignore_whitespace(true);
        let result = compare("  let  x = 1;", "let x = 1;  ", &options).unwrap();
        assert!(result.equal);
    }

    #[test]
    fn test_word_refinement_in_side_by_side() {
        let options = plain().with_view(ViewMode::SideBySide).with_word_diff(true);
        let result = compare("the quick fox", "the slow fox", &options).unwrap();

        assert_eq!(result.refinements.len(), 1);
        let spans = &result.refinements[0].spans;
        let span_kinds: Vec<OpKind> = spans.iter().map(|span| span.kind).collect();
        assert_eq!(span_kinds, vec![OpKind::Equal, OpKind::Replace, OpKind::Equal]);
        assert_eq!(spans[1].old, "quick");
        assert_eq!(spans[1].new, "slow");
    }

    #[test]
    fn test_no_refinements_without_word_diff() {
        let options = plain().with_view(ViewMode::SideBySide);
        let result = compare("the quick fox", "the slow fox", &options).unwrap();
        assert!(result.refinements.is_empty());
    }

    #[test]
    fn test_reflexive() {
        let text = "alpha\nbeta\ngamma\nbeta";
        let result = compare(text, text, &plain()).unwrap();
        assert_eq!(kinds(&result), vec![OpKind::Equal]);
        assert!(result.equal);
        assert!(result.identical);
        assert_eq!(result.stats.similarity_ratio, 1.0);
        assert_eq!(result.stats.total_changes, 0);
        assert!(result.hunks.is_empty());
    }

    #[test]
    fn test_swapped_inputs_mirror_counts() {
        let old = "keep\ngone\nsame";
        let new = "keep\nsame\nadded\nmore";
        let forward = compare(old, new, &plain()).unwrap();
        let backward = compare(new, old, &plain()).unwrap();

        assert_eq!(forward.stats.additions, backward.stats.deletions);
        assert_eq!(forward.stats.deletions, backward.stats.additions);
        assert_eq!(forward.stats.similarity_ratio, backward.stats.similarity_ratio);
    }

    #[test]
    fn test_similarity_bounds() {
        let cases = [("", ""), ("a", ""), ("", "b"), ("a\nb", "c\nd"), ("a\nb\nc", "a\nc")];
        for (old, new) in cases {
            let result = compare(old, new, &plain()).unwrap();
            let ratio = result.stats.similarity_ratio;
            assert!((0.0..=1.0).contains(&ratio), "{old:?} vs {new:?}: {ratio}");
        }
    }

    #[test]
    fn test_empty_inputs() {
        let both = compare("", "", &plain()).unwrap();
        assert!(both.equal);
        assert!(both.opcodes.is_empty());
        assert_eq!(both.stats.similarity_ratio, 1.0);

        let inserted = compare("", "x\ny", &plain()).unwrap();
        assert_eq!(kinds(&inserted), vec![OpKind::Insert]);
        assert_eq!(inserted.stats.additions, 2);
        assert_eq!(inserted.stats.similarity_ratio, 0.0);

        let deleted = compare("x\ny", "", &plain()).unwrap();
        assert_eq!(kinds(&deleted), vec![OpKind::Delete]);
        assert_eq!(deleted.stats.deletions, 2);
    }

    #[test]
    fn test_rejects_conflicting_views() {
        let mut options = plain();
        options.side_by_side = true;
        options.inline = true;
        assert!(matches!(
            compare("a", "b", &options),
            Err(DiffError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_negative_context() {
        let options = plain().with_context(-1);
        assert!(matches!(
            compare("a", "b", &options),
            Err(DiffError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_word_diff_outside_side_by_side() {
        let options = plain().with_word_diff(true);
        assert!(matches!(
            compare("a", "b", &options),
            Err(DiffError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_quiet_renders_nothing() {
        let options = plain().with_quiet(true);
        let result = compare("a", "b", &options).unwrap();
        assert!(result.rendered_text.is_empty());
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_stats_view_skips_hunks() {
        let options = plain().with_view(ViewMode::Stats);
        let result = compare("a\nb", "a\nc", &options).unwrap();
        assert!(result.hunks.is_empty());
        assert!(result.rendered_text.starts_with("Diff Statistics: a ↔ b"));
    }

    #[test]
    fn test_language_detection() {
        let options = plain().with_labels("src/main.rs", "src/main.rs");
        let result = compare("a", "b", &options).unwrap();
        assert_eq!(result.language.as_deref(), Some("rust"));

        let options = options.with_language("python");
        let result = compare("a", "b", &options).unwrap();
        assert_eq!(result.language.as_deref(), Some("python"));
    }

    #[test]
    fn test_color_toggle() {
        let colored = compare("a", "b", &DiffOptions::new()).unwrap();
        let uncolored = compare("a", "b", &plain()).unwrap();
        assert!(colored.rendered_text.contains('\x1b'));
        assert!(!uncolored.rendered_text.contains('\x1b'));
    }

    #[test]
    fn test_result_to_json() {
        let result = compare("a\nb", "a\nc", &plain()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["equal"], false);
        assert_eq!(json["stats"]["modifications"], 1);
        assert_eq!(json["opcodes"][1]["kind"], "replace");
    }

    #[test]
    fn test_compare_many_keeps_order_and_labels() {
        let pairs = vec![
            FilePair::new("one.txt", "a", "one.txt", "a"),
            FilePair::new("two.txt", "a", "two.txt", "b"),
            FilePair::new("three.txt", "x\ny", "three.txt", "x"),
        ];
        let results = compare_many(pairs, &plain());

        assert_eq!(results.len(), 3);
        let results: Vec<ComparisonResult> = results.into_iter().map(|r| r.unwrap()).collect();
        assert!(results[0].equal);
        assert!(!results[1].equal);
        assert!(results[1].rendered_text.starts_with("--- two.txt\n+++ two.txt\n"));
        assert_eq!(results[2].stats.deletions, 1);
    }

    #[test]
    fn test_compare_many_reports_errors_per_pair() {
        let options = plain().with_word_diff(true);
        let results = compare_many(vec![FilePair::new("a", "x", "b", "y")], &options);
        assert!(matches!(results[0], Err(DiffError::UnsupportedOperation(_))));
    }
}
