//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackCode, Word};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar, full at `log2(candidates)` bits
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// A guess with each letter coloured by its feedback
#[must_use]
pub fn colored_guess(guess: &Word, feedback: FeedbackCode) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, symbol)| colored_letter(letter, symbol).to_string())
        .collect()
}

fn colored_letter(letter: char, symbol: Feedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match symbol {
        Feedback::Correct => cell.black().on_green().bold(),
        Feedback::Present => cell.black().on_yellow().bold(),
        Feedback::Absent => cell.white().on_bright_black(),
    }
}
