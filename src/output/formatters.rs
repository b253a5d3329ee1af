//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its feedback mark
#[must_use]
pub fn colored_feedback(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let letter = letter.to_string();
            match mark {
                Mark::Exact => letter.black().on_green().bold().to_string(),
                Mark::Present => letter.black().on_yellow().bold().to_string(),
                Mark::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    // Cast is safe: values are clamped to [0, width]
    let filled = (ratio.clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
