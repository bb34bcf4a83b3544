//! Deduplicated candidate collections.

use std::collections::HashSet;
use std::collections::hash_set;

/// Deduplicated username candidates for one or more names.
///
/// Accumulation is unordered; use [`CandidateSet::sorted`] or
/// [`CandidateSet::into_sorted`] when presenting candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    inner: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate, returning false if it was already present.
    pub fn insert(&mut self, candidate: impl Into<String>) -> bool {
        self.inner.insert(candidate.into())
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.inner.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates candidates in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.inner.iter()
    }

    /// Returns the candidates in lexicographic (byte) order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.inner.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Consumes the set and returns the candidates in lexicographic order.
    pub fn into_sorted(self) -> Vec<String> {
        let mut sorted: Vec<String> = self.inner.into_iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Moves every candidate of `other` into `self`.
    pub fn union_with(&mut self, other: CandidateSet) {
        if self.inner.len() < other.inner.len() {
            let mut larger = other.inner;
            larger.extend(self.inner.drain());
            self.inner = larger;
        } else {
            self.inner.extend(other.inner);
        }
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<String> for CandidateSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
