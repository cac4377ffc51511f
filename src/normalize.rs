//! Comparison keys for lines.
//!
//! Normalization only changes what the matcher compares. The rendered text is
//! always the caller's original line.

use std::borrow::Cow;

/// Equality relaxations applied before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
}

impl Normalizer {
    pub fn new(ignore_whitespace: bool, ignore_case: bool) -> Self {
        Self {
            ignore_whitespace,
            ignore_case,
        }
    }

    /// True when no relaxation is active and keys equal the input.
    #[inline]
    pub fn is_exact(&self) -> bool {
        !self.ignore_whitespace && !self.ignore_case
    }

    /// Comparison key for one element. Borrows when nothing changes.
    pub fn key<'a>(&self, element: &'a str) -> Cow<'a, str> {
        let mut key = Cow::Borrowed(element);
        if self.is_exact() {
            return key;
        }

        if self.ignore_whitespace {
            key = collapse_whitespace(&key).into();
        }
        if self.ignore_case {
            key = key.to_lowercase().into();
        }

        key
    }

    /// Comparison keys for a whole sequence.
    pub fn keys<'a, S: AsRef<str>>(&self, elements: &'a [S]) -> Vec<Cow<'a, str>> {
        elements.iter().map(|e| self.key(e.as_ref())).collect()
    }
}

/// Trim both ends and collapse every interior whitespace run to one space.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
