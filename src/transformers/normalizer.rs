//! Folds raw document text into lowercase ASCII words and filters them.
//!
//! The folding is applied in this order:
//!
//! 1. line breaks (`\r`, `\n`, U+2028, U+2029) are replaced by a space,
//! 1. text is transliterated to ASCII,
//! 1. NFKD normalization,
//! 1. remaining non-ASCII runs are replaced by a space,
//! 1. lowercasing,
//! 1. anything that is not an ASCII letter or whitespace is replaced by a space,
//! 1. whitespace is collapsed and trimmed.
//!
//! Tokens of the folded text are then filtered by [Stopwords] and [WordLength],
//! and the document is kept only if strictly more than `min_words` tokens remain.
//!
//! Example (stopwords `{"the"}`, default word length, `min_words = 3`):
//! ```text
//! The Quick Brown Fox Jumps! 123
//! ```
//!
//! will be transformed into
//!
//! ```text
//! quick brown fox jumps
//! ```
use deunicode::deunicode_char;
use itertools::Itertools;
use unic_ucd::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

use crate::filtering::{Filter, Stopwords, WordLength};

use super::Transform;

/// Line break characters that collapse multi-line documents.
fn is_line_break(c: char) -> bool {
    matches!(c, '\r' | '\n' | '\u{2028}' | '\u{2029}')
}

/// ASCII whitespace, including the information separators `\x1c`..=`\x1f`.
fn is_space(c: char) -> bool {
    matches!(c, '\t'..='\r' | '\x1c'..='\x1f' | ' ')
}

/// Pictographs and other symbols, which are dropped rather than spelled out.
fn is_symbol(c: char) -> bool {
    matches!(c, '\u{2600}'..='\u{27BF}')
        || c >= '\u{1F000}'
        || GeneralCategory::of(c) == GeneralCategory::OtherSymbol
}

/// Transliterate to ASCII, character by character.
///
/// Symbols and characters without a known transliteration are dropped.
fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if !is_symbol(c) {
            out.push_str(deunicode_char(c).unwrap_or(""));
        }
    }
    out
}

/// Replace each run of characters matching `pred` by a single space.
fn replace_runs(text: &str, pred: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if pred(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: Stopwords,
    length: WordLength,
    min_words: usize,
}

impl Normalizer {
    pub fn new(stopwords: Stopwords, min_word_length: usize, min_words: usize) -> Self {
        Self {
            stopwords,
            length: WordLength::with_min_length(min_word_length),
            min_words,
        }
    }

    /// Get a reference to the (exclusive) minimum number of kept words.
    pub fn min_words(&self) -> &usize {
        &self.min_words
    }

    /// Get a reference to the (exclusive) minimum word length.
    pub fn min_word_length(&self) -> &usize {
        self.length.min_length()
    }

    /// Fold text into space-separated lowercase ASCII words, without filtering.
    pub fn fold(text: &str) -> String {
        let text = replace_runs(text, is_line_break);
        let text = transliterate(&text);
        let text: String = text.nfkd().collect();
        let text = replace_runs(&text, |c| !c.is_ascii()).to_ascii_lowercase();

        let letters: String = text
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || is_space(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        letters
            .split(is_space)
            .filter(|token| !token.is_empty())
            .join(" ")
    }

    fn keep(&self, token: &str) -> bool {
        self.stopwords.detect(token) && self.length.detect(token)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            stopwords: Stopwords::default(),
            length: WordLength::default(),
            min_words: 200,
        }
    }
}

impl Transform for Normalizer {
    fn transform(&self, text: &str) -> Option<String> {
        let folded = Self::fold(text);
        let words: Vec<&str> = folded
            .split(' ')
            .filter(|token| !token.is_empty() && self.keep(token))
            .collect();

        if words.len() > self.min_words {
            Some(words.join(" "))
        } else {
            None
        }
    }
}
