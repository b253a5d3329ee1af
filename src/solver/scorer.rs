//! Heuristic desirability score for a single word
//!
//! The score is a product of factors applied to the summed letter weights:
//! a uniqueness factor, a vowel bonus and a commonness factor. Higher is
//! better. It does not depend on which words are still possible.

use super::frequency::LetterFrequency;
use crate::core::{WORD_LENGTH, Word};

/// The ten Cyrillic vowels
pub const VOWELS: [char; 10] = ['А', 'Е', 'Ё', 'И', 'О', 'У', 'Ы', 'Э', 'Ю', 'Я'];

const VOWEL_BONUS: f64 = 0.1;
const COMMONNESS_DECAY: f64 = 0.0001;
const COMMONNESS_WEIGHT: f64 = 2.0;
const RARE_PENALTY: f64 = 0.3;

/// How common a word is, as far as scoring is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commonness {
    /// Frequent word with its 1-based rank
    Ranked(usize),
    /// Frequent word that the rank table does not cover
    Unranked,
    /// Word only found in the junk list
    Rare,
}

/// Every factor that went into a word's score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Sum of letter weights over all five positions
    pub letter_sum: f64,
    /// Distinct letters / 5
    pub uniqueness: f64,
    /// 1 + 0.1 per distinct vowel
    pub vowel_factor: f64,
    /// Rank bonus, rarity penalty, or 1
    pub commonness_factor: f64,
    /// Product of all of the above
    pub total: f64,
}

/// Compute the score of `word` with every factor kept apart
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use slovo_solver::core::Word;
/// use slovo_solver::solver::{Commonness, LetterFrequency, score_breakdown};
///
/// let word = Word::new("ТАБЛО").unwrap();
/// let letters = LetterFrequency::build(&[word.clone()], &[], &FxHashMap::default());
/// let breakdown = score_breakdown(&word, &letters, Commonness::Rare);
///
/// assert!((breakdown.letter_sum - 1.0).abs() < 1e-12);
/// assert!((breakdown.vowel_factor - 1.2).abs() < 1e-12);
/// assert!((breakdown.commonness_factor - 0.3).abs() < 1e-12);
/// ```
#[must_use]
pub fn score_breakdown(
    word: &Word,
    letters: &LetterFrequency,
    commonness: Commonness,
) -> ScoreBreakdown {
    let letter_sum: f64 = word.chars().iter().map(|&l| letters.weight(l)).sum();

    let unique = word.unique_letters();
    let uniqueness = unique.len() as f64 / WORD_LENGTH as f64;

    let vowels = unique.iter().filter(|&&l| VOWELS.contains(&l)).count();
    let vowel_factor = 1.0 + vowels as f64 * VOWEL_BONUS;

    let commonness_factor = match commonness {
        Commonness::Ranked(rank) => {
            let bonus = 1.0 / (1.0 + rank as f64 * COMMONNESS_DECAY);
            1.0 + bonus * COMMONNESS_WEIGHT
        }
        Commonness::Rare => RARE_PENALTY,
        Commonness::Unranked => 1.0,
    };

    ScoreBreakdown {
        letter_sum,
        uniqueness,
        vowel_factor,
        commonness_factor,
        total: letter_sum * uniqueness * vowel_factor * commonness_factor,
    }
}

/// Compute the score of `word`
#[inline]
#[must_use]
pub fn score(word: &Word, letters: &LetterFrequency, commonness: Commonness) -> f64 {
    score_breakdown(word, letters, commonness).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    /// Junk-only table where every listed letter has the same weight
    fn flat_table(letters: &str) -> LetterFrequency {
        let junk: Vec<Word> = letters
            .chars()
            .collect::<Vec<_>>()
            .chunks(WORD_LENGTH)
            .map(|chunk| Word::new(chunk.iter().collect::<String>()).unwrap())
            .collect();
        LetterFrequency::build(&[], &junk, &FxHashMap::default())
    }

    #[test]
    fn letter_sum_counts_repeated_letters_per_position() {
        let letters = flat_table("АБВГДЕЖЗИК");
        let breakdown = score_breakdown(&word("АААББ"), &letters, Commonness::Unranked);

        assert!((breakdown.letter_sum - 0.5).abs() < 1e-12);
        assert!((breakdown.uniqueness - 0.4).abs() < 1e-12);
    }

    #[test]
    fn repeated_letters_are_penalized() {
        let letters = flat_table("АБВГДЕЖЗИК");
        let distinct = score(&word("БВГДЖ"), &letters, Commonness::Unranked);
        let repeated = score(&word("БББДЖ"), &letters, Commonness::Unranked);

        assert!(distinct > repeated);
    }

    #[test]
    fn vowels_counted_once_each() {
        let letters = flat_table("АБВГДЕЖЗИК");
        let one_vowel = score_breakdown(&word("АБВГД"), &letters, Commonness::Unranked);
        let repeated_vowel = score_breakdown(&word("АБВАД"), &letters, Commonness::Unranked);
        let two_vowels = score_breakdown(&word("АБВЕД"), &letters, Commonness::Unranked);

        assert!((one_vowel.vowel_factor - 1.1).abs() < 1e-12);
        assert!((repeated_vowel.vowel_factor - 1.1).abs() < 1e-12);
        assert!((two_vowels.vowel_factor - 1.2).abs() < 1e-12);
    }

    #[test]
    fn yo_counts_as_vowel() {
        let letters = flat_table("ЁЖИКЛ");
        let breakdown = score_breakdown(&word("ЁЖИКЛ"), &letters, Commonness::Unranked);
        assert!((breakdown.vowel_factor - 1.2).abs() < 1e-12);
    }

    #[test]
    fn commonness_factors() {
        let letters = flat_table("ВОДКА");
        let w = word("ВОДКА");

        let first = score_breakdown(&w, &letters, Commonness::Ranked(1));
        assert!((first.commonness_factor - (1.0 + 2.0 / 1.0001)).abs() < 1e-12);

        let unranked = score_breakdown(&w, &letters, Commonness::Unranked);
        assert!((unranked.commonness_factor - 1.0).abs() < 1e-12);

        let rare = score_breakdown(&w, &letters, Commonness::Rare);
        assert!((rare.commonness_factor - 0.3).abs() < 1e-12);
    }

    #[test]
    fn lower_rank_never_scores_lower() {
        let letters = flat_table("ВОДКА");
        let w = word("ВОДКА");

        let mut previous = f64::INFINITY;
        for rank in [1, 2, 10, 100, 1_000, 10_000, 100_000] {
            let s = score(&w, &letters, Commonness::Ranked(rank));
            assert!(s <= previous, "rank {rank} scored above a better rank");
            previous = s;
        }
        assert!(score(&w, &letters, Commonness::Rare) < previous);
    }

    #[test]
    fn total_is_product_of_factors() {
        let letters = flat_table("ВОДКАТБЛЗЕ");
        let b = score_breakdown(&word("ТАБЛО"), &letters, Commonness::Ranked(2));

        let product = b.letter_sum * b.uniqueness * b.vowel_factor * b.commonness_factor;
        assert!((b.total - product).abs() < 1e-12);
        assert!(b.total > 0.0);
    }

    #[test]
    fn unknown_letters_score_zero() {
        let letters = LetterFrequency::default();
        assert!(score(&word("ЩЩЩЩЩ"), &letters, Commonness::Ranked(1)).abs() < 1e-12);
    }
}
