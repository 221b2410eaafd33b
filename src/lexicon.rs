//! Lemma dictionary input.
//!
//! The dictionary is a JSON array of arrays. Each inner array describes one
//! lemma: the word form at index 0, inflection info at index 1 and the
//! grammatical category at index 2. Anything past that is carried along
//! but never looked at.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, WordlistError};

const WORD_FIELD: usize = 0;
const CATEGORY_FIELD: usize = 2;

/// One record from the lemma dictionary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct LexiconEntry(Vec<Value>);

impl LexiconEntry {
    pub fn new(fields: Vec<Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[Value] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word form, if the first field is text
    pub fn word(&self) -> Option<&str> {
        self.0.get(WORD_FIELD).and_then(Value::as_str)
    }

    /// The grammatical category, if a third field is present and is text
    pub fn category(&self) -> Option<&str> {
        self.0.get(CATEGORY_FIELD).and_then(Value::as_str)
    }
}

/// Decode a lexicon from JSON text.
pub fn parse_lexicon(json: &str) -> Result<Vec<LexiconEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a lexicon from raw bytes.
pub fn parse_lexicon_bytes(json: &[u8]) -> Result<Vec<LexiconEntry>> {
    Ok(serde_json::from_slice(json)?)
}

/// Read and decode the lexicon file at `path`.
pub fn read_lexicon<P: AsRef<Path>>(path: P) -> Result<Vec<LexiconEntry>> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| WordlistError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_lexicon_bytes(&data)?;
    tracing::debug!(entries = entries.len(), path = %path.display(), "lexicon loaded");
    Ok(entries)
}
