//! Five-letter word representation
//!
//! A Word stores an uppercase 5-letter word as both text and a fixed array of
//! characters, so position lookups work for Cyrillic (multi-byte) letters.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Guess must be exactly 5 letters, got {0}")]
    InvalidGuessLength(usize),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is upper-cased before its length is checked. Only the length
    /// is validated; the alphabet is not.
    ///
    /// # Errors
    /// Returns `WordError::InvalidGuessLength` if the upper-cased text is not
    /// exactly 5 characters long.
    ///
    /// # Examples
    /// ```
    /// use slovo_solver::core::Word;
    ///
    /// let word = Word::new("водка").unwrap();
    /// assert_eq!(word.text(), "ВОДКА");
    ///
    /// assert!(Word::new("слишком").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_uppercase();
        let letters: Vec<char> = text.chars().collect();

        let chars: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|rest: Vec<char>| WordError::InvalidGuessLength(rest.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Distinct letters of the word, in order of first appearance
    #[must_use]
    pub fn unique_letters(&self) -> Vec<char> {
        let mut unique = Vec::with_capacity(WORD_LENGTH);
        for &ch in &self.chars {
            if !unique.contains(&ch) {
                unique.push(ch);
            }
        }
        unique
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
