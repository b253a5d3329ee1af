//! Main solver interface
//!
//! A `Solver` owns the two candidate sets of one game and borrows the shared
//! `Dictionary`. Candidate sets only shrink until `reset` restores them.

use super::dictionary::Dictionary;
use super::matcher::matches;
use crate::core::{Feedback, Word, WordError};
use log::{debug, warn};
use std::cmp::Ordering;

/// Tunable solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    first_guess_limit: usize,
}

impl SolverOptions {
    /// Create solver options
    ///
    /// # Parameters
    /// - `first_guess_limit`: Pool members scored for the first guess (default: 100).
    ///   Raised to 1 when 0, so an opening guess always exists.
    #[must_use]
    pub const fn new(first_guess_limit: usize) -> Self {
        let first_guess_limit = if first_guess_limit == 0 {
            1
        } else {
            first_guess_limit
        };
        Self { first_guess_limit }
    }

    /// Number of pool members scored for the very first guess
    #[inline]
    #[must_use]
    pub const fn first_guess_limit(&self) -> usize {
        self.first_guess_limit
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Word game solver
///
/// Tracks which words are still consistent with the feedback of the current
/// game and proposes the best-scoring one.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    options: SolverOptions,
    /// Dictionary indices still possible, in dictionary order
    possible_all: Vec<usize>,
    /// The frequent subset of `possible_all`
    possible_frequent: Vec<usize>,
}

impl<'a> Solver<'a> {
    /// Create a solver with default options, ready for a new game
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_options(dictionary, SolverOptions::default())
    }

    /// Create a solver with the given options, ready for a new game
    #[must_use]
    pub fn with_options(dictionary: &'a Dictionary, options: SolverOptions) -> Self {
        let mut solver = Self {
            dictionary,
            options,
            possible_all: Vec::with_capacity(dictionary.len()),
            possible_frequent: Vec::with_capacity(dictionary.frequent_len()),
        };
        solver.reset();
        solver
    }

    /// Restore both candidate sets to the full dictionary
    pub fn reset(&mut self) {
        self.possible_all.clear();
        self.possible_all.extend(0..self.dictionary.len());
        self.possible_frequent.clear();
        self.possible_frequent
            .extend(0..self.dictionary.frequent_len());
    }

    /// Get the best guess for the current state
    ///
    /// Prefers frequent candidates and falls back to all candidates once no
    /// frequent word remains. With `first_guess` set, only the first
    /// `first_guess_limit` pool members are scored. Ties go to the word that
    /// comes first in dictionary order.
    ///
    /// Returns `None` when no word is consistent with the feedback so far.
    ///
    /// # Examples
    /// ```
    /// use slovo_solver::core::Word;
    /// use slovo_solver::solver::{Dictionary, Solver};
    ///
    /// let frequent = vec![Word::new("ВОДКА").unwrap(), Word::new("ТАБЛО").unwrap()];
    /// let junk = vec![Word::new("ЗЕВОК").unwrap()];
    /// let dictionary = Dictionary::from_lists(frequent, junk);
    /// let solver = Solver::new(&dictionary);
    ///
    /// let guess = solver.best_guess(true).unwrap();
    /// assert_ne!(guess.text(), "ЗЕВОК");
    /// ```
    #[must_use]
    pub fn best_guess(&self, first_guess: bool) -> Option<&'a Word> {
        let dictionary = self.dictionary;
        self.pool(first_guess)
            .iter()
            .copied()
            .reduce(|best, i| {
                match dictionary.score_at(i).total_cmp(&dictionary.score_at(best)) {
                    Ordering::Greater => i,
                    _ => best,
                }
            })
            .map(|i| dictionary.word_at(i))
    }

    /// Get the top `limit` guesses with their scores, best first
    ///
    /// Uses the same pool and ordering as `best_guess`, so the first entry is
    /// always the best guess.
    #[must_use]
    pub fn ranked_guesses(&self, first_guess: bool, limit: usize) -> Vec<(&'a Word, f64)> {
        let dictionary = self.dictionary;
        let mut ranked: Vec<(usize, f64)> = self
            .pool(first_guess)
            .iter()
            .map(|&i| (i, dictionary.score_at(i)))
            .collect();

        // Stable: equal scores keep dictionary order
        ranked.sort_by(|(_, s1), (_, s2)| s2.total_cmp(s1));

        ranked
            .into_iter()
            .take(limit)
            .map(|(i, score)| (dictionary.word_at(i), score))
            .collect()
    }

    /// Apply one round of feedback for `guess`
    ///
    /// The guess is upper-cased, then every word that is not consistent with
    /// the feedback is dropped from both candidate sets.
    ///
    /// # Errors
    /// Returns `WordError::InvalidGuessLength` if the guess is not 5 letters.
    pub fn process_feedback(&mut self, guess: &str, feedback: &Feedback) -> Result<(), WordError> {
        let guess = Word::new(guess)?;
        self.apply_feedback(&guess, feedback);
        Ok(())
    }

    /// Apply one round of feedback for an already validated guess
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let before = self.possible_all.len();
        let dictionary = self.dictionary;

        self.possible_all
            .retain(|&i| matches(dictionary.word_at(i), guess, feedback));
        self.possible_frequent.clear();
        self.possible_frequent.extend(
            self.possible_all
                .iter()
                .copied()
                .filter(|&i| dictionary.is_frequent_index(i)),
        );

        debug!(
            "{guess} {feedback}: {before} -> {} candidates ({} frequent)",
            self.possible_all.len(),
            self.possible_frequent.len()
        );
        if self.possible_all.is_empty() {
            warn!("No word is consistent with the feedback for {guess}");
        }
    }

    /// Number of words still possible
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.possible_all.len()
    }

    /// Number of frequent words still possible
    #[must_use]
    pub fn frequent_count(&self) -> usize {
        self.possible_frequent.len()
    }

    /// All words still possible, in dictionary order
    pub fn candidates(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let dictionary = self.dictionary;
        self.possible_all.iter().map(move |&i| dictionary.word_at(i))
    }

    /// Frequent words still possible, in dictionary order
    pub fn frequent_candidates(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let dictionary = self.dictionary;
        self.possible_frequent
            .iter()
            .map(move |&i| dictionary.word_at(i))
    }

    /// Check if `word` is still possible
    #[must_use]
    pub fn is_candidate(&self, word: &Word) -> bool {
        self.dictionary
            .index_of(word)
            .is_some_and(|i| self.possible_all.binary_search(&i).is_ok())
    }

    /// The dictionary this solver draws from
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The options this solver was created with
    #[must_use]
    pub const fn options(&self) -> SolverOptions {
        self.options
    }

    /// Pool that guesses are chosen from
    fn pool(&self, first_guess: bool) -> &[usize] {
        let pool = if self.possible_frequent.is_empty() {
            &self.possible_all
        } else {
            &self.possible_frequent
        };

        if first_guess {
            &pool[..pool.len().min(self.options.first_guess_limit)]
        } else {
            pool
        }
    }
}
