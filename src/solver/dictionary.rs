//! Immutable word data shared by every solver instance
//!
//! Holds the merged word list, the rank table, the letter frequency table and
//! a precomputed score per word. Built once; solvers only borrow it.

use super::frequency::LetterFrequency;
use super::scorer::{Commonness, ScoreBreakdown, score_breakdown};
use crate::core::Word;
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

/// Frequent and junk words with everything derived from them
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Frequent words first, then junk-only words; no duplicates
    words: Vec<Word>,
    /// `words[..frequent_count]` is the frequent list
    frequent_count: usize,
    index: FxHashMap<Word, usize>,
    ranks: FxHashMap<Word, usize>,
    letters: LetterFrequency,
    scores: Vec<f64>,
}

impl Dictionary {
    /// Build a dictionary from both lists, deriving ranks from list positions
    ///
    /// # Examples
    /// ```
    /// use slovo_solver::core::Word;
    /// use slovo_solver::solver::Dictionary;
    ///
    /// let frequent = vec![Word::new("ВОДКА").unwrap(), Word::new("ТАБЛО").unwrap()];
    /// let junk = vec![Word::new("ЗЕВОК").unwrap()];
    /// let dictionary = Dictionary::from_lists(frequent, junk);
    ///
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.rank(&Word::new("ТАБЛО").unwrap()), Some(2));
    /// assert_eq!(dictionary.rank(&Word::new("ЗЕВОК").unwrap()), None);
    /// ```
    #[must_use]
    pub fn from_lists(frequent: Vec<Word>, junk: Vec<Word>) -> Self {
        let ranks = rank_table(&frequent);
        Self::new(frequent, junk, ranks)
    }

    /// Build a dictionary from both lists and an explicit rank table
    ///
    /// Duplicates inside each list are dropped, keeping the first occurrence.
    /// A word found in both lists is treated as frequent.
    #[must_use]
    pub fn new(frequent: Vec<Word>, junk: Vec<Word>, ranks: FxHashMap<Word, usize>) -> Self {
        let frequent = dedup(frequent);
        let junk = dedup(junk);

        let letters = LetterFrequency::build(&frequent, &junk, &ranks);

        let frequent_count = frequent.len();
        let mut words = frequent;
        let mut index: FxHashMap<Word, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        for word in junk {
            if !index.contains_key(&word) {
                index.insert(word.clone(), words.len());
                words.push(word);
            }
        }

        let mut dictionary = Self {
            words,
            frequent_count,
            index,
            ranks,
            letters,
            scores: Vec::new(),
        };
        dictionary.scores = dictionary
            .words
            .iter()
            .map(|w| dictionary.breakdown(w).total)
            .collect();

        info!(
            "Dictionary built: {} frequent, {} junk-only, {} distinct letters",
            dictionary.frequent_count,
            dictionary.words.len() - dictionary.frequent_count,
            dictionary.letters.len()
        );

        dictionary
    }

    /// Total number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct frequent words
    #[must_use]
    pub const fn frequent_len(&self) -> usize {
        self.frequent_count
    }

    /// All words: frequent first, then junk-only
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The frequent words, in list order
    #[must_use]
    pub fn frequent_words(&self) -> &[Word] {
        &self.words[..self.frequent_count]
    }

    /// Check if the word is in either list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Check if the word is in the frequent list
    #[must_use]
    pub fn is_frequent(&self, word: &Word) -> bool {
        self.index
            .get(word)
            .is_some_and(|&i| self.is_frequent_index(i))
    }

    /// 1-based rank of a frequent word
    #[must_use]
    pub fn rank(&self, word: &Word) -> Option<usize> {
        self.ranks.get(word).copied()
    }

    /// The letter frequency table
    #[must_use]
    pub const fn letters(&self) -> &LetterFrequency {
        &self.letters
    }

    /// How common a word is for scoring purposes
    #[must_use]
    pub fn commonness(&self, word: &Word) -> Commonness {
        match self.rank(word) {
            Some(rank) => Commonness::Ranked(rank),
            None if self.is_frequent(word) => Commonness::Unranked,
            None => Commonness::Rare,
        }
    }

    /// Score any word, in the dictionary or not
    #[must_use]
    pub fn score(&self, word: &Word) -> f64 {
        self.index
            .get(word)
            .map_or_else(|| self.breakdown(word).total, |&i| self.scores[i])
    }

    /// Score of `word` with every factor kept apart
    #[must_use]
    pub fn breakdown(&self, word: &Word) -> ScoreBreakdown {
        score_breakdown(word, &self.letters, self.commonness(word))
    }

    #[inline]
    pub(crate) fn word_at(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    pub(crate) fn score_at(&self, index: usize) -> f64 {
        self.scores[index]
    }

    #[inline]
    pub(crate) const fn is_frequent_index(&self, index: usize) -> bool {
        index < self.frequent_count
    }

    pub(crate) fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }
}

/// Map each frequent word to its 1-based position
///
/// A word listed twice keeps the later position.
#[must_use]
pub fn rank_table(frequent: &[Word]) -> FxHashMap<Word, usize> {
    let mut ranks = FxHashMap::default();
    for (i, word) in frequent.iter().enumerate() {
        ranks.insert(word.clone(), i + 1);
    }
    ranks
}

fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen: FxHashSet<Word> = FxHashSet::default();
    words
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample() -> Dictionary {
        Dictionary::from_lists(words(&["ВОДКА", "ТАБЛО"]), words(&["ЗЕВОК"]))
    }

    #[test]
    fn frequent_words_come_first() {
        let dictionary = sample();

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.frequent_len(), 2);
        assert_eq!(dictionary.words(), words(&["ВОДКА", "ТАБЛО", "ЗЕВОК"]).as_slice());
        assert_eq!(dictionary.frequent_words(), words(&["ВОДКА", "ТАБЛО"]).as_slice());
    }

    #[test]
    fn ranks_are_one_based_positions() {
        let dictionary = sample();

        assert_eq!(dictionary.rank(&word("ВОДКА")), Some(1));
        assert_eq!(dictionary.rank(&word("ТАБЛО")), Some(2));
        assert_eq!(dictionary.rank(&word("ЗЕВОК")), None);
    }

    #[test]
    fn rank_table_keeps_later_duplicate() {
        let ranks = rank_table(&words(&["ВОДКА", "ТАБЛО", "ВОДКА"]));
        assert_eq!(ranks.get(&word("ВОДКА")), Some(&3));
        assert_eq!(ranks.get(&word("ТАБЛО")), Some(&2));
    }

    #[test]
    fn duplicates_are_removed() {
        let dictionary = Dictionary::from_lists(
            words(&["ВОДКА", "ВОДКА", "ТАБЛО"]),
            words(&["ЗЕВОК", "ТАБЛО", "ЗЕВОК"]),
        );

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.frequent_len(), 2);
        // Listed as junk too, but frequent membership wins
        assert!(dictionary.is_frequent(&word("ТАБЛО")));
    }

    #[test]
    fn membership() {
        let dictionary = sample();

        assert!(dictionary.contains(&word("ЗЕВОК")));
        assert!(!dictionary.is_frequent(&word("ЗЕВОК")));
        assert!(dictionary.is_frequent(&word("ВОДКА")));
        assert!(!dictionary.contains(&word("ПЕСНЯ")));
        assert_eq!(dictionary.index_of(&word("ЗЕВОК")), Some(2));
    }

    #[test]
    fn commonness_classification() {
        let frequent = words(&["ВОДКА", "ТАБЛО"]);
        let mut ranks = FxHashMap::default();
        ranks.insert(word("ВОДКА"), 1);
        let dictionary = Dictionary::new(frequent, words(&["ЗЕВОК"]), ranks);

        assert_eq!(dictionary.commonness(&word("ВОДКА")), Commonness::Ranked(1));
        assert_eq!(dictionary.commonness(&word("ТАБЛО")), Commonness::Unranked);
        assert_eq!(dictionary.commonness(&word("ЗЕВОК")), Commonness::Rare);
        assert_eq!(dictionary.commonness(&word("ПЕСНЯ")), Commonness::Rare);
    }

    #[test]
    fn cached_scores_match_breakdown() {
        let dictionary = sample();

        for (i, w) in dictionary.words().iter().enumerate() {
            assert!((dictionary.score_at(i) - dictionary.breakdown(w).total).abs() < 1e-12);
            assert!((dictionary.score(w) - dictionary.breakdown(w).total).abs() < 1e-12);
        }
        // Words outside the dictionary are scored on the fly
        let outsider = word("ПЕСНЯ");
        assert!((dictionary.score(&outsider) - dictionary.breakdown(&outsider).total).abs() < 1e-12);
    }

    #[test]
    fn junk_word_scores_below_frequent_peers() {
        let dictionary = sample();
        assert!(dictionary.score(&word("ЗЕВОК")) < dictionary.score(&word("ВОДКА")));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_lists(Vec::new(), Vec::new());

        assert!(dictionary.is_empty());
        assert!(dictionary.letters().is_empty());
        assert!(dictionary.score(&word("ВОДКА")).abs() < 1e-12);
    }
}
