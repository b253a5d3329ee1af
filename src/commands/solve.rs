//! Word solving command
//!
//! Plays a game against a known answer and returns the solution path.

use crate::core::{Feedback, Word};
use crate::solver::Solver;
use anyhow::{Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, starting from a fresh game
///
/// # Errors
///
/// Returns an error if the target is not a 5-letter word or is missing from
/// both word lists.
pub fn solve_word(config: &SolveConfig, solver: &mut Solver<'_>) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    if !solver.dictionary().contains(&target) {
        bail!("{target} is not in the word lists");
    }

    Ok(play_game(solver, &target, config.max_guesses))
}

/// Play one game against `target`, giving real-game feedback after each guess
///
/// The solver is reset first. The game ends when the target is guessed, when
/// `max_guesses` guesses were made, or when no candidate remains.
pub fn play_game(solver: &mut Solver<'_>, target: &Word, max_guesses: usize) -> SolveResult {
    solver.reset();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..max_guesses {
        let candidates_before = solver.candidate_count();

        let Some(guess) = solver.best_guess(turn == 0) else {
            break;
        };

        let feedback = Feedback::calculate(guess, target);
        solver.apply_feedback(guess, &feedback);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            score: solver.dictionary().score(guess),
            candidates_before,
            candidates_after: solver.candidate_count(),
        });

        if feedback.is_solved() {
            return SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            };
        }
    }

    SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    }
}
