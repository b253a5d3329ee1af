//! Per-letter feedback returned by the game after a guess
//!
//! Each of the five guess positions receives one mark:
//! - Exact: the letter is in this exact position (green, `З`)
//! - Present: the letter is in the word, elsewhere (yellow, `Ж`)
//! - Absent: the letter is not in the word (gray, `С`)

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is in the correct position
    Exact,
    /// Letter is in the word but at another position
    Present,
    /// Letter is not in the word
    Absent,
}

impl Mark {
    /// Parse a single feedback symbol
    ///
    /// Accepts the Russian color initials (`З`/`Ж`/`С`), the Latin `G`/`Y`/`-`
    /// notation and the colored square emoji. Letters are case-insensitive.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'З' | 'з' | 'G' | 'g' | '🟩' => Some(Self::Exact),
            'Ж' | 'ж' | 'Y' | 'y' | '🟨' => Some(Self::Present),
            'С' | 'с' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical Russian symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'З',
            Self::Present => 'Ж',
            Self::Absent => 'С',
        }
    }

    /// Colored square emoji for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Invalid feedback {input:?}: expected 5 marks, got {len}")]
    InvalidLength { input: String, len: usize },
    #[error("Invalid feedback {input:?}: unknown mark {symbol:?} at position {position}")]
    InvalidMark {
        input: String,
        symbol: char,
        position: usize,
    },
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All marks exact (the guess was the answer)
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// The marks, in guess position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&mark| mark == Mark::Exact)
    }

    /// Parse feedback from a string like "ЗССЖС", "G--Y-" or "🟩⬜⬜🟨⬜"
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string does not hold exactly 5 marks or
    /// contains an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use slovo_solver::core::{Feedback, Mark};
    ///
    /// let f1 = Feedback::parse("ЗССЖС").unwrap();
    /// let f2 = Feedback::parse("g--y-").unwrap();
    /// assert_eq!(f1, f2);
    /// assert_eq!(f1.marks()[3], Mark::Present);
    /// ```
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = input.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength {
                input: input.to_string(),
                len: symbols.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, (&symbol, mark)) in symbols.iter().zip(marks.iter_mut()).enumerate() {
            *mark = Mark::from_symbol(symbol).ok_or_else(|| FeedbackError::InvalidMark {
                input: input.to_string(),
                symbol,
                position,
            })?;
        }

        Ok(Self(marks))
    }

    /// Calculate the feedback the game gives when `guess` is played against `answer`
    ///
    /// Follows the real game's rules for repeated letters: exact matches are
    /// assigned first, then present marks are handed out from the letters of
    /// the answer that remain unmatched.
    ///
    /// # Examples
    /// ```
    /// use slovo_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("ВОДКА").unwrap();
    /// let answer = Word::new("ВЕСНА").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "ЗСССЗ");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available: FxHashMap<char, usize> = FxHashMap::default();

        // First pass: exact matches; everything else stays available
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
            } else {
                *available.entry(a).or_insert(0) += 1;
            }
        }

        // Second pass: present marks from the remaining pool
        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Convert feedback to an emoji string like "🟩⬜⬜🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.to_string(), "ЗЗЗЗЗ");
    }

    #[test]
    fn parse_accepts_all_notations() {
        let russian = Feedback::parse("ЗЖССЖ").unwrap();
        let latin = Feedback::parse("GY--Y").unwrap();
        let lower = Feedback::parse("зжссж").unwrap();
        let emoji = Feedback::parse("🟩🟨⬜⬜🟨").unwrap();
        let underscores = Feedback::parse("gy__y").unwrap();

        assert_eq!(russian, latin);
        assert_eq!(russian, lower);
        assert_eq!(russian, emoji);
        assert_eq!(russian, underscores);
        assert_eq!(
            russian.marks(),
            &[
                Mark::Exact,
                Mark::Present,
                Mark::Absent,
                Mark::Absent,
                Mark::Present
            ]
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Feedback::parse("ЗЖС"),
            Err(FeedbackError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Feedback::parse("ЗЖССЖЖ"),
            Err(FeedbackError::InvalidLength { len: 6, .. })
        ));
        assert!(matches!(
            Feedback::parse(""),
            Err(FeedbackError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_unknown_mark() {
        assert_eq!(
            Feedback::parse("ЗЖXСС"),
            Err(FeedbackError::InvalidMark {
                input: "ЗЖXСС".to_string(),
                symbol: 'X',
                position: 2,
            })
        );
    }

    #[test]
    fn calculate_all_absent() {
        let feedback = Feedback::calculate(&word("ВОДКА"), &word("ЩЁЛЧИ"));
        assert_eq!(feedback.to_string(), "ССССС");
    }

    #[test]
    fn calculate_same_word_is_solved() {
        for text in ["ВОДКА", "ТАБЛО", "КОКОН"] {
            let w = word(text);
            assert!(Feedback::calculate(&w, &w).is_solved());
        }
    }

    #[test]
    fn calculate_present_and_exact() {
        // ТАБЛО vs БАЛЕТ: Т present, А exact, Б present, Л present, О absent
        let feedback = Feedback::calculate(&word("ТАБЛО"), &word("БАЛЕТ"));
        assert_eq!(feedback.to_string(), "ЖЗЖЖС");
    }

    #[test]
    fn calculate_repeated_letters_consume_pool() {
        // КОКОН vs ОКЕАН: only one К and one О in the answer
        // К(present) О(present) К(absent) О(absent) Н(exact)
        let feedback = Feedback::calculate(&word("КОКОН"), &word("ОКЕАН"));
        assert_eq!(feedback.to_string(), "ЖЖССЗ");
    }

    #[test]
    fn calculate_exact_takes_priority_over_present() {
        // ПАПКА vs ЛАПША: second П is exact, so the first gets nothing left
        let feedback = Feedback::calculate(&word("ПАПКА"), &word("ЛАПША"));
        assert_eq!(feedback.to_string(), "СЗЗСЗ");
    }

    #[test]
    fn emoji_round_trip() {
        let feedback = Feedback::parse("ЗЖССЖ").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟨");
        assert_eq!(Feedback::parse(&feedback.to_emoji()).unwrap(), feedback);
    }
}
