//! # Diceware Wordlist
//!
//! Builds a Norwegian Diceware wordlist from a lemma dictionary.
//!
//! Candidate words are filtered by length and grammatical category, drawn
//! round-robin across the alphabet so every first letter stays represented,
//! sorted, and numbered with five-roll dice codes from `11111` to `66666`.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod numbering;
pub mod output;
pub mod selector;

use std::path::Path;

pub use config::WordlistConfig;
pub use error::{Result, WordlistError};
pub use lexicon::{parse_lexicon, read_lexicon, LexiconEntry};
pub use numbering::{number, write_numbered, DiceCode, NumberedWord};
pub use output::write_wordlist;
pub use selector::{select, Buckets, FilterStats, Rejection, Selection, Selector};

/// Number of die rolls per code
pub const DICE_ROLLS: usize = 5;

/// Faces on a die
pub const DIE_FACES: u8 = 6;

/// Words in a full Diceware list (6^5)
pub const MAX_WORDS: usize = 7776;

pub const MIN_WORD_LENGTH: usize = 4;
pub const MAX_WORD_LENGTH: usize = 9;

/// Valid first letters, in round-robin order
pub const NORWEGIAN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzæøå";

pub const DEFAULT_INPUT_PATH: &str = "lemma_expanded.json";
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Read the lexicon at `input`, select a wordlist and write it to `output`.
///
/// Returns the number of lines written.
pub fn generate<P, Q>(config: &WordlistConfig, input: P, output: Q) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let entries = read_lexicon(input)?;
    let selection = Selector::new(config).select(&entries)?;
    write_wordlist(output, &selection.words)?;
    Ok(selection.words.len())
}
