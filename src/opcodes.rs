//! Edit operations derived from matching blocks.

use crate::matcher::MatchBlock;
use serde::Serialize;
use std::ops::Range;

/// Classification of an [`Opcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl OpKind {
    /// Classifies a gap between two matching blocks by which sides are
    /// non-empty. `None` when both sides are empty.
    #[inline]
    fn for_gap(a_len: usize, b_len: usize) -> Option<Self> {
        match (a_len > 0, b_len > 0) {
            (true, true) => Some(Self::Replace),
            (true, false) => Some(Self::Delete),
            (false, true) => Some(Self::Insert),
            (false, false) => None,
        }
    }
}

/// One edit operation over half-open index ranges of `a` and `b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Opcode {
    pub kind: OpKind,
    pub a: Range<usize>,
    pub b: Range<usize>,
}

impl Opcode {
    #[inline]
    #[must_use]
    pub fn new(kind: OpKind, a: Range<usize>, b: Range<usize>) -> Self {
        Self { kind, a, b }
    }

    #[inline]
    pub fn is_change(&self) -> bool {
        self.kind != OpKind::Equal
    }

    /// The first `n` elements of this opcode (equal opcodes only keep both
    /// sides in step).
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        let n_a = n.min(self.a.len());
        let n_b = n.min(self.b.len());
        Self::new(
            self.kind,
            self.a.start..self.a.start + n_a,
            self.b.start..self.b.start + n_b,
        )
    }

    /// The last `n` elements of this opcode.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let n_a = n.min(self.a.len());
        let n_b = n.min(self.b.len());
        Self::new(self.kind, self.a.end - n_a..self.a.end, self.b.end - n_b..self.b.end)
    }
}

/// Converts matching blocks (ending with the zero-length sentinel) into
/// opcodes that partition both sequences exactly.
pub fn build(blocks: &[MatchBlock]) -> Vec<Opcode> {
    let mut opcodes = Vec::with_capacity(blocks.len() * 2);
    let (mut i, mut j) = (0, 0);

    for block in blocks {
        if let Some(kind) = OpKind::for_gap(block.a_start - i, block.b_start - j) {
            opcodes.push(Opcode::new(kind, i..block.a_start, j..block.b_start));
        }
        i = block.a_end();
        j = block.b_end();
        if block.len > 0 {
            opcodes.push(Opcode::new(OpKind::Equal, block.a_start..i, block.b_start..j));
        }
    }

    opcodes
}
