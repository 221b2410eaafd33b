//! Word selection with round-robin letter balancing.
//!
//! Candidate words are filtered, grouped by first letter and then drawn one
//! letter at a time in alphabet order. A letter with thousands of candidates
//! gets no more turns than a letter with a handful, so the final list keeps
//! every letter represented as long as it has words left.

use std::collections::HashMap;

use crate::config::WordlistConfig;
use crate::error::{Result, WordlistError};
use crate::lexicon::LexiconEntry;

/// Why an entry was left out of the buckets. Filters run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Category is one of the excluded tags
    Category,
    /// No text word form at index 0
    Shape,
    /// Word contains a space, hyphen or period
    Characters,
    /// Character count outside the allowed range
    Length,
    /// Lowercased first letter is not in the alphabet
    Alphabet,
}

/// Per-reason counters collected while bucketing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub accepted: usize,
    pub category: usize,
    pub shape: usize,
    pub characters: usize,
    pub length: usize,
    pub alphabet: usize,
}

impl FilterStats {
    pub fn record(&mut self, outcome: std::result::Result<char, Rejection>) {
        match outcome {
            Ok(_) => self.accepted += 1,
            Err(Rejection::Category) => self.category += 1,
            Err(Rejection::Shape) => self.shape += 1,
            Err(Rejection::Characters) => self.characters += 1,
            Err(Rejection::Length) => self.length += 1,
            Err(Rejection::Alphabet) => self.alphabet += 1,
        }
    }

    pub fn rejected(&self) -> usize {
        self.category + self.shape + self.characters + self.length + self.alphabet
    }

    pub fn total(&self) -> usize {
        self.accepted + self.rejected()
    }
}

/// Accepted words grouped by first letter, in alphabet order.
///
/// Words stay where they are; the drain only moves a read cursor per letter.
#[derive(Debug, Clone)]
pub struct Buckets {
    letters: Vec<char>,
    slots: HashMap<char, usize>,
    words: Vec<Vec<String>>,
    cursors: Vec<usize>,
}

impl Buckets {
    pub fn new(alphabet: &[char]) -> Self {
        Self {
            letters: alphabet.to_vec(),
            slots: alphabet.iter().enumerate().map(|(i, &c)| (c, i)).collect(),
            words: vec![Vec::new(); alphabet.len()],
            cursors: vec![0; alphabet.len()],
        }
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.slots.contains_key(&letter)
    }

    /// Append a word to its letter's bucket. Returns false for letters outside the alphabet.
    pub fn push(&mut self, letter: char, word: String) -> bool {
        match self.slots.get(&letter) {
            Some(&slot) => {
                self.words[slot].push(word);
                true
            }
            None => false,
        }
    }

    pub fn bucket(&self, letter: char) -> &[String] {
        match self.slots.get(&letter) {
            Some(&slot) => &self.words[slot],
            None => &[],
        }
    }

    /// Words not yet taken by the drain
    pub fn remaining(&self) -> usize {
        self.words
            .iter()
            .zip(&self.cursors)
            .map(|(words, &cursor)| words.len() - cursor)
            .sum()
    }

    /// Bucket sizes in alphabet order
    pub fn sizes(&self) -> Vec<(char, usize)> {
        self.letters
            .iter()
            .zip(&self.words)
            .map(|(&letter, words)| (letter, words.len()))
            .collect()
    }

    /// Take the front word of each non-empty bucket in alphabet order, over and
    /// over, until `target` words have been taken. Stops mid-sweep once the
    /// target is reached.
    ///
    /// Fails with `InsufficientData` when a whole sweep yields nothing.
    pub fn drain_round_robin(&mut self, target: usize) -> Result<Vec<String>> {
        let mut taken = Vec::with_capacity(target);
        while taken.len() < target {
            let before = taken.len();
            for slot in 0..self.letters.len() {
                if taken.len() >= target {
                    break;
                }
                let cursor = self.cursors[slot];
                if let Some(word) = self.words[slot].get(cursor) {
                    taken.push(word.clone());
                    self.cursors[slot] += 1;
                }
            }
            if taken.len() == before {
                return Err(WordlistError::InsufficientData {
                    available: taken.len(),
                    required: target,
                });
            }
        }
        Ok(taken)
    }

    /// Number of words the drain has taken from each letter, in alphabet order
    pub fn drawn(&self) -> Vec<(char, usize)> {
        self.letters
            .iter()
            .copied()
            .zip(self.cursors.iter().copied())
            .collect()
    }
}

/// Result of a selection run
#[derive(Debug, Clone)]
pub struct Selection {
    /// The selected words, sorted
    pub words: Vec<String>,
    pub stats: FilterStats,
    /// Words drawn per letter, in alphabet order
    pub per_letter: Vec<(char, usize)>,
}

/// Filters lexicon entries and draws a balanced, sorted wordlist.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    config: &'a WordlistConfig,
}

impl<'a> Selector<'a> {
    pub fn new(config: &'a WordlistConfig) -> Self {
        Self { config }
    }

    /// Run the filters on one entry and return the bucket letter it belongs to.
    pub fn classify(&self, entry: &LexiconEntry) -> std::result::Result<char, Rejection> {
        if entry.is_empty() {
            return Err(Rejection::Shape);
        }
        if let Some(category) = entry.category() {
            if self.config.is_excluded_category(category) {
                return Err(Rejection::Category);
            }
        }
        let word = entry.word().ok_or(Rejection::Shape)?;
        if self.config.has_forbidden_char(word) {
            return Err(Rejection::Characters);
        }
        if !self.config.accepts_length(word.chars().count()) {
            return Err(Rejection::Length);
        }
        let letter = word
            .to_lowercase()
            .chars()
            .next()
            .ok_or(Rejection::Length)?;
        if !self.config.alphabet.contains(&letter) {
            return Err(Rejection::Alphabet);
        }
        Ok(letter)
    }

    /// Group accepted words by first letter, keeping lexicon order within a letter.
    pub fn bucket(&self, entries: &[LexiconEntry]) -> (Buckets, FilterStats) {
        let mut buckets = Buckets::new(&self.config.alphabet);
        let mut stats = FilterStats::default();

        for entry in entries {
            let outcome = self.classify(entry);
            stats.record(outcome);
            if let (Ok(letter), Some(word)) = (outcome, entry.word()) {
                buckets.push(letter, word.to_string());
            }
        }

        (buckets, stats)
    }

    pub fn select(&self, entries: &[LexiconEntry]) -> Result<Selection> {
        self.config.validate()?;

        let (mut buckets, stats) = self.bucket(entries);
        tracing::debug!(
            accepted = stats.accepted,
            category = stats.category,
            shape = stats.shape,
            characters = stats.characters,
            length = stats.length,
            alphabet = stats.alphabet,
            "lexicon filtered"
        );

        let sizes = buckets.sizes();
        for (letter, size) in &sizes {
            tracing::debug!(%letter, size, "bucket filled");
        }
        let empty: String = sizes
            .into_iter()
            .filter(|(_, size)| *size == 0)
            .map(|(letter, _)| letter)
            .collect();
        if !empty.is_empty() {
            tracing::warn!(letters = %empty, "no candidate words for some letters");
        }

        let mut words = buckets.drain_round_robin(self.config.max_words)?;
        words.sort();

        let per_letter = buckets.drawn();
        for (letter, count) in &per_letter {
            tracing::debug!(%letter, count, "words drawn");
        }
        tracing::info!(
            selected = words.len(),
            candidates = stats.accepted,
            "selection complete"
        );

        Ok(Selection {
            words,
            stats,
            per_letter,
        })
    }
}

/// Select a sorted wordlist of `config.max_words` words from `entries`.
pub fn select(entries: &[LexiconEntry], config: &WordlistConfig) -> Result<Vec<String>> {
    Selector::new(config).select(entries).map(|s| s.words)
}
