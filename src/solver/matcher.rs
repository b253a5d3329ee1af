//! Consistency check between a word and one round of feedback
//!
//! Each position is checked on its own. An absent mark rules out the letter
//! everywhere in the word, even when the same letter is marked exact or
//! present at another position of the guess.

use crate::core::{Feedback, Mark, Word};

/// Check whether `word` could be the answer given `feedback` for `guess`
///
/// # Examples
/// ```
/// use slovo_solver::core::{Feedback, Word};
/// use slovo_solver::solver::matches;
///
/// let guess = Word::new("ВОДКА").unwrap();
/// let feedback = Feedback::parse("ЗСССС").unwrap();
///
/// assert!(matches(&Word::new("ВЕСНЫ").unwrap(), &guess, &feedback));
/// assert!(!matches(&Word::new("ТАБЛО").unwrap(), &guess, &feedback));
/// ```
#[must_use]
pub fn matches(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    feedback
        .marks()
        .iter()
        .enumerate()
        .all(|(i, &mark)| {
            let letter = guess.char_at(i);
            match mark {
                Mark::Exact => word.char_at(i) == letter,
                Mark::Present => word.char_at(i) != letter && word.has_letter(letter),
                Mark::Absent => !word.has_letter(letter),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn feedback(text: &str) -> Feedback {
        Feedback::parse(text).unwrap()
    }

    #[test]
    fn exact_requires_same_letter_in_place() {
        let guess = word("ВОДКА");
        let fb = feedback("ЗСССС");

        assert!(matches(&word("ВЕСНЫ"), &guess, &fb));
        assert!(!matches(&word("ТАБЛО"), &guess, &fb));
        assert!(!matches(&word("ПЕСНЯ"), &guess, &fb));
    }

    #[test]
    fn present_requires_letter_elsewhere() {
        let guess = word("ТАБЛО");
        let fb = feedback("ЖСССС");

        // Т elsewhere, no А/Б/Л/О
        assert!(matches(&word("ШЕСТЬ"), &guess, &fb));
        assert!(matches(&word("ЕНОТЫ"), &word("ТРУСЫ"), &feedback("ЖСССЗ")));
        // Т in the same place would have been exact
        assert!(!matches(&word("ТЕНЬЕ"), &guess, &fb));
        // No Т at all
        assert!(!matches(&word("ПЕСНЬ"), &guess, &fb));
    }

    #[test]
    fn absent_rules_out_letter_everywhere() {
        let guess = word("ЗЕВОК");
        let fb = feedback("ССССС");

        assert!(matches(&word("ТАБЛУ"), &guess, &fb));
        assert!(!matches(&word("ТАБЛО"), &guess, &fb));
    }

    #[test]
    fn solved_feedback_matches_only_the_guess() {
        let guess = word("ТАБЛО");
        assert!(matches(&guess, &guess, &Feedback::SOLVED));
        assert!(!matches(&word("ВОДКА"), &guess, &Feedback::SOLVED));
    }

    #[test]
    fn repeated_guess_letter_absent_rejects_the_answer() {
        // Real feedback for КОКОН against ОКЕАН marks the second К absent,
        // which rules out every word containing К, the answer included.
        let guess = word("КОКОН");
        let answer = word("ОКЕАН");
        let fb = Feedback::calculate(&guess, &answer);

        assert_eq!(fb.to_string(), "ЖЖССЗ");
        assert!(!matches(&answer, &guess, &fb));
    }

    #[test]
    fn matches_answer_when_guess_has_no_repeats() {
        let answer = word("БАЛЕТ");
        for guess in ["ТАБЛО", "ВОДКА", "ЗЕВОК", "БАЛЕТ"] {
            let guess = word(guess);
            let fb = Feedback::calculate(&guess, &answer);
            assert!(matches(&answer, &guess, &fb), "{guess} should keep {answer}");
        }
    }
}
