//! Word-level refinement of single-line replacements.
//!
//! A replace opcode pairing exactly one old line with one new line is split
//! into words and aligned again with the same matcher. The resulting spans
//! only drive highlighting; the line-level classification never changes,
//! and neither does the displayed text: spans carry byte ranges into the
//! original lines so renderers can paint in place.
//! Multi-line replacements are left alone since pairing words across
//! reordered blocks would suggest alignments that do not exist.

use crate::matcher::matching_blocks;
use crate::opcodes::{self, OpKind, Opcode};
use serde::Serialize;
use smallvec::SmallVec;
use std::ops::Range;

/// Most refined lines split into a handful of spans; keep them inline.
pub type WordSpans = SmallVec<[WordSpan; 4]>;

/// One word-level edit inside a replaced line pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSpan {
    pub kind: OpKind,

    /// Word indices into the old line.
    pub a: Range<usize>,

    /// Word indices into the new line.
    pub b: Range<usize>,

    /// Bytes of the old line covered by the span, from the first word's
    /// start to the last word's end. Empty (at the gap position) for inserts.
    pub a_bytes: Range<usize>,

    /// Bytes of the new line covered by the span. Empty for deletes.
    pub b_bytes: Range<usize>,

    /// The old text of this span, interior spacing kept. Empty for inserts.
    pub old: String,

    /// The new text of this span. Empty for deletes.
    pub new: String,
}

/// Word spans for one refined replace opcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRefinement {
    /// Index of the old line.
    pub a_line: usize,

    /// Index of the new line.
    pub b_line: usize,

    pub spans: WordSpans,
}

/// Byte ranges of the whitespace-separated words of a line.
pub fn tokenize(line: &str) -> Vec<Range<usize>> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push(s..i);
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(s..line.len());
    }
    words
}

/// Bytes covered by the words at `indices`.
fn byte_span(words: &[Range<usize>], indices: &Range<usize>, line_len: usize) -> Range<usize> {
    match (words.get(indices.start), indices.end.checked_sub(1).and_then(|last| words.get(last))) {
        (Some(first), Some(last)) if !indices.is_empty() => first.start..last.end,
        (Some(next), _) => next.start..next.start,
        _ => line_len..line_len,
    }
}

/// Aligns the words of two lines and returns spans covering both exactly.
pub fn refine(old_line: &str, new_line: &str) -> WordSpans {
    let old_ranges = tokenize(old_line);
    let new_ranges = tokenize(new_line);
    let old_words: Vec<&str> = old_ranges.iter().map(|r| &old_line[r.clone()]).collect();
    let new_words: Vec<&str> = new_ranges.iter().map(|r| &new_line[r.clone()]).collect();
    let blocks = matching_blocks(&old_words, &new_words);

    opcodes::build(&blocks)
        .into_iter()
        .map(|op| {
            let a_bytes = byte_span(&old_ranges, &op.a, old_line.len());
            let b_bytes = byte_span(&new_ranges, &op.b, new_line.len());
            WordSpan {
                kind: op.kind,
                old: old_line[a_bytes.clone()].to_string(),
                new: new_line[b_bytes.clone()].to_string(),
                a: op.a,
                b: op.b,
                a_bytes,
                b_bytes,
            }
        })
        .collect()
}

/// Refines every replace opcode that spans exactly one line on each side.
pub fn refine_replacements<S: AsRef<str>>(opcodes: &[Opcode], a: &[S], b: &[S]) -> Vec<LineRefinement> {
    opcodes
        .iter()
        .filter(|op| op.kind == OpKind::Replace && op.a.len() == 1 && op.b.len() == 1)
        .map(|op| LineRefinement {
            a_line: op.a.start,
            b_line: op.b.start,
            spans: refine(a[op.a.start].as_ref(), b[op.b.start].as_ref()),
        })
        .collect()
}
