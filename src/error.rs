use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    /// Lexicon file missing or unreadable.
    #[error("error reading lexicon '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lexicon content is not a JSON array of arrays.
    #[error("error decoding lexicon: {0}")]
    Parse(#[from] serde_json::Error),

    /// The round-robin drain ran out of words before reaching the target.
    #[error("insufficient data: only {available} words passed the filters, {required} required")]
    InsufficientData { available: usize, required: usize },

    /// Output file could not be created, written or persisted.
    #[error("error writing wordlist '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WordlistError>;
