//! One-shot suggestion command
//!
//! Applies a feedback history to a fresh game and reports the best guesses.

use crate::core::{Feedback, Word};
use crate::solver::Solver;
use anyhow::{Context, Result};

/// Result of a suggestion request
pub struct SuggestResult {
    /// Best guesses with their scores, best first; empty when nothing remains
    pub guesses: Vec<(String, f64)>,
    pub candidate_count: usize,
    pub frequent_count: usize,
    /// A few remaining candidates, in dictionary order
    pub sample: Vec<String>,
}

/// Parse a history entry of the form `GUESS:FEEDBACK`, e.g. `ВОДКА:ЗССЖС`
///
/// # Errors
///
/// Returns an error if the separator is missing, the guess is not 5 letters
/// or the feedback is malformed.
pub fn parse_history_entry(entry: &str) -> Result<(Word, Feedback)> {
    let (guess, feedback) = entry
        .split_once(':')
        .with_context(|| format!("History entry {entry:?} must look like GUESS:FEEDBACK"))?;

    let guess = Word::new(guess.trim()).with_context(|| format!("Bad guess in {entry:?}"))?;
    let feedback =
        Feedback::parse(feedback.trim()).with_context(|| format!("Bad feedback in {entry:?}"))?;
    Ok((guess, feedback))
}

/// Start a new game, apply `history` and rank the next guesses
pub fn suggest(solver: &mut Solver<'_>, history: &[(Word, Feedback)], top: usize) -> SuggestResult {
    solver.reset();
    for (guess, feedback) in history {
        solver.apply_feedback(guess, feedback);
    }

    let guesses = solver
        .ranked_guesses(history.is_empty(), top)
        .into_iter()
        .map(|(word, score)| (word.text().to_string(), score))
        .collect();

    SuggestResult {
        guesses,
        candidate_count: solver.candidate_count(),
        frequent_count: solver.frequent_count(),
        sample: solver
            .candidates()
            .take(10)
            .map(|w| w.text().to_string())
            .collect(),
    }
}
