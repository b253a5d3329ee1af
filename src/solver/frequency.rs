//! Weighted letter frequency model
//!
//! Every letter occurrence in a frequent word contributes a weight that decays
//! with the word's rank; every occurrence in a junk word contributes a small
//! flat weight. The table is normalized so all weights sum to 1.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Rank decay applied to a frequent word's letter weight
const RANK_DECAY: f64 = 0.001;

/// Rank assumed for a frequent word missing from the rank table
pub const UNRANKED_FALLBACK_RANK: usize = 10_000;

/// Weight of each letter occurrence in a junk word
const JUNK_LETTER_WEIGHT: f64 = 0.1;

/// Normalized per-letter weight table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterFrequency {
    weights: FxHashMap<char, f64>,
}

impl LetterFrequency {
    /// Build the table from both word lists
    ///
    /// `frequent` and `junk` are expected to be free of duplicates; every entry
    /// is counted once per letter occurrence.
    ///
    /// # Examples
    /// ```
    /// use rustc_hash::FxHashMap;
    /// use slovo_solver::core::Word;
    /// use slovo_solver::solver::LetterFrequency;
    ///
    /// let junk = vec![Word::new("ААААБ").unwrap()];
    /// let table = LetterFrequency::build(&[], &junk, &FxHashMap::default());
    ///
    /// assert!((table.weight('А') - 0.8).abs() < 1e-12);
    /// assert!((table.weight('Б') - 0.2).abs() < 1e-12);
    /// assert_eq!(table.weight('Я'), 0.0);
    /// ```
    #[must_use]
    pub fn build(frequent: &[Word], junk: &[Word], ranks: &FxHashMap<Word, usize>) -> Self {
        let mut weights: FxHashMap<char, f64> = FxHashMap::default();
        let mut total = 0.0;

        for word in frequent {
            let rank = ranks.get(word).copied().unwrap_or(UNRANKED_FALLBACK_RANK);
            let weight = 1.0 / (1.0 + rank as f64 * RANK_DECAY);
            for &letter in word.chars() {
                *weights.entry(letter).or_insert(0.0) += weight;
                total += weight;
            }
        }

        for word in junk {
            for &letter in word.chars() {
                *weights.entry(letter).or_insert(0.0) += JUNK_LETTER_WEIGHT;
                total += JUNK_LETTER_WEIGHT;
            }
        }

        if total > 0.0 {
            for weight in weights.values_mut() {
                *weight /= total;
            }
        }

        Self { weights }
    }

    /// Weight of a letter; letters never seen weigh 0
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: char) -> f64 {
        self.weights.get(&letter).copied().unwrap_or(0.0)
    }

    /// Number of distinct letters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if no letter was seen at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The `n` heaviest letters, heaviest first (ties by letter)
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<(char, f64)> {
        let mut letters: Vec<(char, f64)> = self.weights.iter().map(|(&l, &w)| (l, w)).collect();
        letters.sort_by(|(l1, w1), (l2, w2)| w2.total_cmp(w1).then(l1.cmp(l2)));
        letters.truncate(n);
        letters
    }
}
