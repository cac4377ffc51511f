//! Longest-matching-block alignment of two sequences.
//!
//! The matcher repeatedly finds the longest run of equal elements inside a
//! pair of index ranges, then does the same for the regions before and after
//! it. The result is a human-readable alignment rather than a minimal edit
//! script.
//!
//! ## Popular elements
//!
//! When the second sequence has at least [`AUTOJUNK_MIN_LEN`] elements, any
//! element occurring more than `len / 100 + 1` times in it is "popular": it
//! is dropped from the position index and can never anchor a match. Popular
//! elements still extend a match that borders them, so files dominated by a
//! repeated line (blank lines, closing braces) align on their distinctive
//! lines and absorb the repeats around them.
//!
//! The index is owned by one [`Matcher`] value, so independent comparisons
//! share nothing.

use log::trace;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Minimum length of the second sequence before popular elements are
/// suppressed.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// A maximal run of `len` equal elements at `a[a_start..]` and `b[b_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

impl MatchBlock {
    #[inline]
    #[must_use]
    pub fn new(a_start: usize, b_start: usize, len: usize) -> Self {
        Self {
            a_start,
            b_start,
            len,
        }
    }

    #[inline]
    pub fn a_end(&self) -> usize {
        self.a_start + self.len
    }

    #[inline]
    pub fn b_end(&self) -> usize {
        self.b_start + self.len
    }
}

/// Index ranges still to be searched: `(a_lo, a_hi, b_lo, b_hi)`.
type Region = (usize, usize, usize, usize);

/// Aligns two sequences of comparable elements.
pub struct Matcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each non-popular element of `b`, ascending.
    b2j: HashMap<&'a T, Vec<usize>>,
    popular: HashSet<&'a T>,
}

impl<'a, T: Eq + Hash> Matcher<'a, T> {
    /// Creates a matcher with popular-element suppression enabled.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_autojunk(a, b, true)
    }

    pub fn with_autojunk(a: &'a [T], b: &'a [T], autojunk: bool) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::with_capacity(b.len());
        for (j, element) in b.iter().enumerate() {
            b2j.entry(element).or_default().push(j);
        }

        let mut popular = HashSet::new();
        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            b2j.retain(|element, positions| {
                if positions.len() > threshold {
                    popular.insert(*element);
                    false
                } else {
                    true
                }
            });
            trace!(
                "suppressed {} popular elements (threshold {threshold}, len {})",
                popular.len(),
                b.len()
            );
        }

        Self { a, b, b2j, popular }
    }

    /// Longest run of equal elements within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Ties go to the run starting earliest in `a`, then earliest in `b`.
    /// Returns a zero-length block when nothing matches.
    pub fn find_longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> MatchBlock {
        let (a, b) = (self.a, self.b);
        let mut best = MatchBlock::new(a_lo, b_lo, 0);

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in a_lo..a_hi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.len {
                        best = MatchBlock::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            j2len = next;
        }

        // Grow through equal neighbours; only popular elements can still match here.
        while best.a_start > a_lo && best.b_start > b_lo && a[best.a_start - 1] == b[best.b_start - 1] {
            best.a_start -= 1;
            best.b_start -= 1;
            best.len += 1;
        }
        while best.a_end() < a_hi && best.b_end() < b_hi && a[best.a_end()] == b[best.b_end()] {
            best.len += 1;
        }

        best
    }

    /// All matching blocks in increasing order, adjacent blocks merged,
    /// terminated by the sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let (la, lb) = (self.a.len(), self.b.len());

        if la > 0 && self.a == self.b {
            trace!("identical sequences of {la} elements");
            return vec![MatchBlock::new(0, 0, la), MatchBlock::new(la, lb, 0)];
        }

        let mut found = Vec::new();
        let mut stack: Vec<Region> = vec![(0, la, 0, lb)];
        while let Some((a_lo, a_hi, b_lo, b_hi)) = stack.pop() {
            let block = self.find_longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.len == 0 {
                continue;
            }
            found.push(block);
            if a_lo < block.a_start && b_lo < block.b_start {
                stack.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            if block.a_end() < a_hi && block.b_end() < b_hi {
                stack.push((block.a_end(), a_hi, block.b_end(), b_hi));
            }
        }
        found.sort_unstable();

        let mut blocks: Vec<MatchBlock> = Vec::with_capacity(found.len() + 1);
        for block in found {
            if let Some(last) = blocks.last_mut() {
                if last.a_end() == block.a_start && last.b_end() == block.b_start {
                    last.len += block.len;
                    continue;
                }
            }
            blocks.push(block);
        }
        blocks.push(MatchBlock::new(la, lb, 0));
        blocks
    }
}

/// Matching blocks of `a` against `b` with popular-element suppression.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchBlock> {
    Matcher::new(a, b).matching_blocks()
}

/// Total number of matched elements across `blocks`.
pub fn matched_elements(blocks: &[MatchBlock]) -> usize {
    blocks.iter().map(|block| block.len).sum()
}
