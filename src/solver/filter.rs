//! Candidate filtering
//!
//! Keeps exactly the candidates that would have produced the observed
//! feedback for a guess.

use crate::core::{FeedbackCode, Word};
use crate::error::SolverError;

/// Narrow `candidates` to the words consistent with `(guess, feedback)`
///
/// Returns `{ c in candidates | compute(guess, c) == feedback }` in input
/// order. The result is always a subset of the input, and the true solution
/// is never dropped when the feedback was computed against it.
///
/// # Errors
/// - `InvalidFeedbackLength` if `feedback` does not have one symbol per guess letter
/// - `LengthMismatch` if a candidate's length differs from the guess
///
/// # Examples
/// ```
/// use lingo_solver::core::{FeedbackCode, Word};
/// use lingo_solver::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "trace", "react"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let feedback = FeedbackCode::parse("12202", 5).unwrap();
///
/// let remaining = filter_candidates(&words, &guess, feedback).unwrap();
/// assert_eq!(remaining, vec![Word::new("trace").unwrap()]);
/// ```
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    feedback: FeedbackCode,
) -> Result<Vec<Word>, SolverError> {
    if feedback.len() != guess.len() {
        return Err(SolverError::InvalidFeedbackLength {
            input: feedback.to_string(),
            expected: guess.len(),
            actual: feedback.len(),
        });
    }

    if let Some(other) = candidates.iter().find(|c| c.len() != guess.len()) {
        return Err(SolverError::LengthMismatch {
            guess: guess.text().to_string(),
            other: other.text().to_string(),
        });
    }

    Ok(candidates
        .iter()
        .filter(|&candidate| FeedbackCode::calculate(guess, candidate) == feedback)
        .cloned()
        .collect())
}
