//! Selection parameters for building a wordlist.

use std::collections::HashSet;

use crate::error::{Result, WordlistError};
use crate::numbering::DiceCode;
use crate::{MAX_WORDS, MAX_WORD_LENGTH, MIN_WORD_LENGTH, NORWEGIAN_ALPHABET};

/// Grammatical categories that never make it into the wordlist.
pub const EXCLUDED_CATEGORIES: [&str; 4] = ["EXPR", "NOUN", "ABBR", "PROPN"];

/// Characters that disqualify a word form (multi-word expressions, compounds, abbreviations).
pub const FORBIDDEN_CHARS: [char; 3] = [' ', '-', '.'];

/// Immutable configuration shared by the selector and the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistConfig {
    /// Valid first letters, in round-robin order.
    pub alphabet: Vec<char>,
    /// Exact number of words to select.
    pub max_words: usize,
    /// Minimum word length in characters, inclusive.
    pub min_word_length: usize,
    /// Maximum word length in characters, inclusive.
    pub max_word_length: usize,
    pub excluded_categories: Vec<String>,
    pub forbidden_chars: Vec<char>,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            alphabet: NORWEGIAN_ALPHABET.chars().collect(),
            max_words: MAX_WORDS,
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            excluded_categories: EXCLUDED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            forbidden_chars: FORBIDDEN_CHARS.to_vec(),
        }
    }
}

impl WordlistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        self.alphabet = alphabet.chars().collect();
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_word_length(mut self, min: usize, max: usize) -> Self {
        self.min_word_length = min;
        self.max_word_length = max;
        self
    }

    pub fn is_excluded_category(&self, category: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == category)
    }

    pub fn has_forbidden_char(&self, word: &str) -> bool {
        word.chars().any(|c| self.forbidden_chars.contains(&c))
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_word_length..=self.max_word_length).contains(&length)
    }

    /// Check the configuration before running a selection.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(WordlistError::Config("alphabet is empty".into()));
        }
        let mut seen = HashSet::new();
        for &letter in &self.alphabet {
            if !seen.insert(letter) {
                return Err(WordlistError::Config(format!(
                    "letter '{}' appears more than once in the alphabet",
                    letter
                )));
            }
        }
        if self.min_word_length == 0 {
            return Err(WordlistError::Config(
                "minimum word length must be at least 1".into(),
            ));
        }
        if self.min_word_length > self.max_word_length {
            return Err(WordlistError::Config(format!(
                "minimum word length {} exceeds maximum {}",
                self.min_word_length, self.max_word_length
            )));
        }
        if self.max_words > DiceCode::CAPACITY {
            return Err(WordlistError::Config(format!(
                "{} words do not fit in {} dice codes",
                self.max_words,
                DiceCode::CAPACITY
            )));
        }
        Ok(())
    }
}

