//! Diceware numbering for a finished wordlist.
//!
//! Each word gets a code made of five die rolls. Codes are handed out in
//! odometer order starting at `11111`, so the n-th word of a sorted list
//! is the word for the n-th combination of rolls.

use std::io::Write;
use std::str::FromStr;

use crate::{DICE_ROLLS, DIE_FACES};

/// A sequence of die rolls, most significant roll first.
/// Every digit is in `1..=DIE_FACES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceCode([u8; DICE_ROLLS]);

impl DiceCode {
    /// The code assigned to the first word
    pub const FIRST: Self = Self([1; DICE_ROLLS]);

    /// The code assigned to the last word of a full list
    pub const LAST: Self = Self([DIE_FACES; DICE_ROLLS]);

    /// Number of distinct codes (6^5)
    pub const CAPACITY: usize = (DIE_FACES as usize).pow(DICE_ROLLS as u32);

    /// Create a code from individual rolls, rejecting digits outside `1..=6`.
    pub fn from_digits(digits: [u8; DICE_ROLLS]) -> Option<Self> {
        if digits.iter().all(|d| (1..=DIE_FACES).contains(d)) {
            Some(Self(digits))
        } else {
            None
        }
    }

    pub fn digits(self) -> [u8; DICE_ROLLS] {
        self.0
    }

    /// Advance to the next code.
    ///
    /// The rightmost roll below six is bumped; every six to its right
    /// rolls back to one. `66666` wraps around to `11111`.
    pub fn increment(&mut self) {
        for digit in self.0.iter_mut().rev() {
            if *digit < DIE_FACES {
                *digit += 1;
                return;
            }
            *digit = 1;
        }
    }

    /// Zero-based position of this code in odometer order
    pub fn index(self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, &d| acc * DIE_FACES as usize + (d - 1) as usize)
    }
}

impl Default for DiceCode {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for DiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for DiceCode {
    type Err = String;

    /// Parse a code like "11111" or "35462"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Option<Vec<u8>> = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        let digits = digits.ok_or_else(|| format!("invalid dice code: {}", s))?;
        let arr: [u8; DICE_ROLLS] = digits
            .try_into()
            .map_err(|_| format!("dice code must have {} rolls: {}", DICE_ROLLS, s))?;
        Self::from_digits(arr).ok_or_else(|| format!("dice code out of range: {}", s))
    }
}

/// A word together with the dice code that selects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedWord<'a> {
    pub code: DiceCode,
    pub word: &'a str,
}

impl std::fmt::Display for NumberedWord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.code, self.word)
    }
}

/// Pair each word with its code, in input order.
pub fn number<S: AsRef<str>>(words: &[S]) -> Vec<NumberedWord<'_>> {
    let mut code = DiceCode::FIRST;
    words
        .iter()
        .map(|word| {
            let numbered = NumberedWord {
                code,
                word: word.as_ref(),
            };
            code.increment();
            numbered
        })
        .collect()
}

/// Write one `code\tword` line per word.
pub fn write_numbered<S, W>(words: &[S], mut writer: W) -> std::io::Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    for numbered in number(words) {
        writeln!(writer, "{}", numbered)?;
    }
    writer.flush()
}
