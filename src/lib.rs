//! Slovo Solver
//!
//! A helper for the five-letter word game played with Russian words. It keeps
//! the set of words consistent with the feedback so far and proposes the one
//! with the best frequency-weighted letter score.
//!
//! # Quick Start
//!
//! ```rust
//! use slovo_solver::core::Feedback;
//! use slovo_solver::solver::{Dictionary, Solver};
//! use slovo_solver::wordlists::loader::parse_word_list;
//!
//! let frequent = parse_word_list("ВОДКА\nТАБЛО\n");
//! let junk = parse_word_list("ЗЕВОК\n");
//! let dictionary = Dictionary::from_lists(frequent, junk);
//! let mut solver = Solver::new(&dictionary);
//!
//! let guess = solver.best_guess(true).unwrap().clone();
//! solver.process_feedback(guess.text(), &Feedback::parse("ССССС").unwrap()).unwrap();
//! println!("{} candidates left", solver.candidate_count());
//! ```

// Core domain types
pub mod core;

// Filtering and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
