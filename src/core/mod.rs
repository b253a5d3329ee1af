//! Core domain types for the word game
//!
//! This module contains the fundamental value types shared by the solver,
//! the word list loader and the commands.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
