//! Core domain types for Lingo
//!
//! Words and the feedback engine. Everything here is pure: no state, no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackCode};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
