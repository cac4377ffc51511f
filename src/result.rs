//! The value returned for one comparison.

use crate::error::Result;
use crate::opcodes::Opcode;
use crate::stats::Stats;
use crate::window::Hunk;
use crate::words::LineRefinement;
use serde::Serialize;

/// Exit status for a process front end when its inputs could not be loaded.
/// Never produced by the comparison itself.
pub const EXIT_INPUT_FAILURE: i32 = 2;

/// Outcome of comparing two texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// No changes under the configured normalization.
    pub equal: bool,

    /// The raw lines are identical, ignoring normalization.
    pub identical: bool,

    pub stats: Stats,

    /// Full, unwindowed edit script.
    pub opcodes: Vec<Opcode>,

    /// Context-windowed hunks. Empty for the stats view.
    pub hunks: Vec<Hunk>,

    /// Word spans of refined single-line replacements. Empty unless word
    /// highlighting was requested.
    pub refinements: Vec<LineRefinement>,

    /// Language tag handed to the highlighter, if any.
    pub language: Option<String>,

    /// Output in the selected layout. Empty in quiet mode.
    pub rendered_text: String,
}

impl ComparisonResult {
    /// `0` when equal, `1` otherwise.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        if self.equal { 0 } else { 1 }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
