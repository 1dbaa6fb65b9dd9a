//! token-level filtering
use std::collections::HashSet;

use super::Filter;

/// Simple length filter.
/// Returns `false` if provided token is not strictly longer than [WordLength::min_length] characters.
///
/// [WordLength::min_length] is 2 by default.
#[derive(Debug, Clone)]
pub struct WordLength {
    min_length: usize,
}

impl WordLength {
    /// specify a minimum length
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Get a reference to the minimum (exclusive) length.
    pub fn min_length(&self) -> &usize {
        &self.min_length
    }
}

impl Filter<&str> for WordLength {
    fn detect(&self, token: &str) -> bool {
        token.chars().count() > self.min_length
    }
}

impl Default for WordLength {
    fn default() -> Self {
        WordLength { min_length: 2 }
    }
}

/// Stopword filter.
/// Returns `false` if the provided token is present verbatim in the stopword list.
///
/// The default filter has an empty list and keeps everything.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn new(words: HashSet<String>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<HashSet<String>> for Stopwords {
    fn from(words: HashSet<String>) -> Self {
        Self::new(words)
    }
}

impl Filter<&str> for Stopwords {
    fn detect(&self, token: &str) -> bool {
        !self.words.contains(token)
    }
}
