//! Word analysis command
//!
//! Shows how a single word is scored.

use crate::core::Word;
use crate::solver::{Commonness, Dictionary, ScoreBreakdown};
use anyhow::Result;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub commonness: Commonness,
    pub in_dictionary: bool,
    pub breakdown: ScoreBreakdown,
    /// 1-based place among all dictionary words by score
    pub score_position: usize,
    pub dictionary_size: usize,
    /// Weight of each letter of the word, in position order
    pub letter_weights: Vec<(char, f64)>,
    /// Heaviest letters of the whole dictionary, for comparison
    pub top_letters: Vec<(char, f64)>,
}

impl AnalysisResult {
    /// Weight of the heaviest dictionary letter, the full length of a weight bar
    #[must_use]
    pub fn max_letter_weight(&self) -> f64 {
        self.top_letters.first().map_or(0.0, |&(_, weight)| weight)
    }
}

/// Analyze the score of a word against the dictionary
///
/// # Errors
///
/// Returns an error if the word is not 5 letters long.
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    let breakdown = dictionary.breakdown(&word);

    let better = dictionary
        .words()
        .iter()
        .filter(|&w| w != &word && dictionary.score(w) > breakdown.total)
        .count();

    let letter_weights = word
        .chars()
        .iter()
        .map(|&letter| (letter, dictionary.letters().weight(letter)))
        .collect();

    Ok(AnalysisResult {
        word: word.text().to_string(),
        commonness: dictionary.commonness(&word),
        in_dictionary: dictionary.contains(&word),
        breakdown,
        score_position: better + 1,
        dictionary_size: dictionary.len(),
        letter_weights,
        top_letters: dictionary.letters().top(10),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::from_lists(
            words_from_slice(&["ВОДКА", "ТАБЛО"]),
            words_from_slice(&["ЗЕВОК"]),
        )
    }

    #[test]
    fn analyze_frequent_word() {
        let dictionary = dictionary();
        let result = analyze_word("водка", &dictionary).unwrap();

        assert_eq!(result.word, "ВОДКА");
        assert_eq!(result.commonness, Commonness::Ranked(1));
        assert!(result.in_dictionary);
        assert_eq!(result.dictionary_size, 3);
        assert_eq!(result.letter_weights.len(), 5);
        assert_eq!(result.letter_weights[0].0, 'В');
        // О appears in all three words
        assert_eq!(result.top_letters[0].0, 'О');
    }

    #[test]
    fn letter_weights_are_scaled_by_heaviest_letter() {
        let dictionary = dictionary();
        let result = analyze_word("ВОДКА", &dictionary).unwrap();
        let heaviest = result.max_letter_weight();

        assert!(heaviest > 0.1);
        assert!((heaviest - dictionary.letters().weight('О')).abs() < 1e-12);
        for &(_, weight) in &result.letter_weights {
            assert!(weight <= heaviest);
        }
    }

    #[test]
    fn analyze_junk_word_ranks_last() {
        let dictionary = dictionary();
        let result = analyze_word("ЗЕВОК", &dictionary).unwrap();

        assert_eq!(result.commonness, Commonness::Rare);
        assert_eq!(result.score_position, 3);
    }

    #[test]
    fn analyze_unknown_word() {
        let dictionary = dictionary();
        let result = analyze_word("ПЕСНЯ", &dictionary).unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.commonness, Commonness::Rare);
        assert!(result.score_position >= 1);
    }

    #[test]
    fn analyze_invalid_word_returns_error() {
        let dictionary = dictionary();
        assert!(analyze_word("ЛУЧ", &dictionary).is_err());
    }
}
