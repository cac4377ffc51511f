//! Summary statistics of a comparison.
//!
//! Stats are computed once from the full opcode list, independent of any
//! context windowing, and never change afterwards.

use crate::config::ModificationWeighting;
use crate::matcher::{MatchBlock, matched_elements};
use crate::opcodes::{OpKind, Opcode};
use serde::Serialize;

/// Width, in cells, of the longest distribution bar.
pub const BAR_WIDTH: usize = 50;

/// Counts and similarity for one comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub lines_a: usize,
    pub lines_b: usize,
    /// New lines from insert and replace opcodes.
    pub additions: usize,
    /// Old lines from delete and replace opcodes.
    pub deletions: usize,
    pub modifications: usize,
    /// `additions + deletions + modifications`.
    pub total_changes: usize,
    /// `2 * matched / (lines_a + lines_b)`, in `[0, 1]`.
    pub similarity_ratio: f64,
}

impl Stats {
    /// Similarity as a percentage, for display.
    #[inline]
    pub fn similarity_percent(&self) -> f64 {
        self.similarity_ratio * 100.0
    }

    /// Bar widths for the change-distribution chart.
    pub fn distribution(&self) -> Distribution {
        Distribution::scaled(self.additions, self.deletions, self.modifications, BAR_WIDTH)
    }
}

/// Derives [`Stats`] from the full opcode list and the matching blocks it
/// was built from.
pub fn aggregate(
    opcodes: &[Opcode],
    blocks: &[MatchBlock],
    lines_a: usize,
    lines_b: usize,
    weighting: ModificationWeighting,
) -> Stats {
    let mut additions = 0;
    let mut deletions = 0;
    let mut modifications = 0;

    for op in opcodes {
        match op.kind {
            OpKind::Equal => {}
            OpKind::Insert => additions += op.b.len(),
            OpKind::Delete => deletions += op.a.len(),
            OpKind::Replace => {
                additions += op.b.len();
                deletions += op.a.len();
                modifications += match weighting {
                    ModificationWeighting::Lines => op.a.len().max(op.b.len()),
                    ModificationWeighting::Blocks => 1,
                };
            }
        }
    }

    Stats {
        lines_a,
        lines_b,
        additions,
        deletions,
        modifications,
        total_changes: additions + deletions + modifications,
        similarity_ratio: similarity_ratio(matched_elements(blocks), lines_a, lines_b),
    }
}

/// Doubled-overlap ratio; `1.0` when both sequences are empty.
pub fn similarity_ratio(matched: usize, len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 1.0;
    }
    (2.0 * matched as f64 / total as f64).clamp(0.0, 1.0)
}

/// Bar widths proportional to each count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
}

impl Distribution {
    /// Scales the counts so their sum maps to `width`. A nonzero count
    /// always gets at least one cell.
    pub fn scaled(additions: usize, deletions: usize, modifications: usize, width: usize) -> Self {
        let total = additions + deletions + modifications;
        if total == 0 {
            return Self::default();
        }

        let scale = |count: usize| {
            if count == 0 {
                0
            } else {
                (count * width / total).max(1)
            }
        };

        Self {
            additions: scale(additions),
            deletions: scale(deletions),
            modifications: scale(modifications),
        }
    }
}
