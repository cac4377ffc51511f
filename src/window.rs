//! Grouping of opcodes into display hunks.
//!
//! Changes are always shown in full. Unchanged runs contribute at most
//! `context` lines next to each change; a run between two changes that is
//! longer than `2 * context` is cut, and the number of hidden lines is
//! recorded on the hunk that follows the cut. Unchanged lines before the first
//! change or after the last one are dropped silently beyond the context.

use crate::opcodes::{OpKind, Opcode};
use serde::Serialize;
use std::ops::Range;

/// A display group of consecutive opcodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Unchanged lines elided between the previous hunk and this one.
    /// Zero for the first hunk and whenever context is zero.
    pub hidden_before: usize,

    /// Opcodes in order; leading and trailing equal opcodes are trimmed to
    /// the context size.
    pub opcodes: Vec<Opcode>,
}

impl Hunk {
    /// Range of old lines covered by this hunk.
    pub fn a_range(&self) -> Range<usize> {
        match (self.opcodes.first(), self.opcodes.last()) {
            (Some(first), Some(last)) => first.a.start..last.a.end,
            _ => 0..0,
        }
    }

    /// Range of new lines covered by this hunk.
    pub fn b_range(&self) -> Range<usize> {
        match (self.opcodes.first(), self.opcodes.last()) {
            (Some(first), Some(last)) => first.b.start..last.b.end,
            _ => 0..0,
        }
    }

    /// Changed lines (old plus new) in this hunk.
    pub fn changed_lines(&self) -> usize {
        self.opcodes
            .iter()
            .filter(|op| op.is_change())
            .map(|op| op.a.len() + op.b.len())
            .sum()
    }

    /// Unchanged lines shown in this hunk.
    pub fn context_lines(&self) -> usize {
        self.opcodes
            .iter()
            .filter(|op| op.kind == OpKind::Equal)
            .map(|op| op.a.len())
            .sum()
    }
}

/// Splits `opcodes` into hunks with up to `context` unchanged lines around
/// each change. Returns no hunks when nothing changed.
pub fn window(opcodes: &[Opcode], context: usize) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Vec<Opcode> = Vec::new();
    let mut hidden_before = 0;
    let last_index = opcodes.len().saturating_sub(1);

    for (index, op) in opcodes.iter().enumerate() {
        if op.is_change() {
            current.push(op.clone());
            continue;
        }

        let len = op.a.len();
        let keep = context.min(len);
        let is_first = index == 0;
        let is_last = index == last_index;

        match (is_first, is_last) {
            // Nothing but unchanged lines: no hunk at all.
            (true, true) => {}
            (true, false) => {
                if keep > 0 {
                    current.push(op.tail(keep));
                }
            }
            (false, true) => {
                if keep > 0 {
                    current.push(op.head(keep));
                }
            }
            (false, false) if context > 0 && len <= 2 * context => current.push(op.clone()),
            (false, false) => {
                if context > 0 {
                    current.push(op.head(context));
                }
                hunks.push(Hunk {
                    hidden_before,
                    opcodes: std::mem::take(&mut current),
                });
                hidden_before = if context > 0 { len - 2 * context } else { 0 };
                if context > 0 {
                    current.push(op.tail(context));
                }
            }
        }
    }

    if current.iter().any(Opcode::is_change) {
        hunks.push(Hunk {
            hidden_before,
            opcodes: current,
        });
    }

    hunks
}
