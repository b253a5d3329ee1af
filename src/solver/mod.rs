//! Candidate filtering and guess scoring
//!
//! `Dictionary` holds the immutable word data (ranks, letter weights, scores);
//! `Solver` holds the shrinking candidate sets of one game.

mod dictionary;
mod engine;
pub mod frequency;
mod matcher;
pub mod scorer;

pub use dictionary::{Dictionary, rank_table};
pub use engine::{Solver, SolverOptions};
pub use frequency::LetterFrequency;
pub use matcher::matches;
pub use scorer::{Commonness, ScoreBreakdown, score, score_breakdown};
