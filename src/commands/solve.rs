//! Word solving command
//!
//! Plays a session against a known target word and records the path taken.

use crate::core::{FeedbackCode, Word};
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, SolverState};
use tracing::debug;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    /// Stop after this many guesses; `None` plays until the session ends
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: None,
        }
    }

    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = Some(max_guesses);
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    /// `AwaitingFeedback` means the guess limit was hit first
    pub outcome: SolverState,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == SolverState::Solved
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Uncertainty before the guess, in bits
    pub bits_before: f64,
    /// Expected information of the guess; `None` when only one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target` starting from a fresh session
///
/// `template` is cloned, so one set-up session can serve many targets.
/// A target outside the candidate list is allowed; the session then ends
/// `Exhausted`.
///
/// # Errors
/// - `InvalidWord` if the target is not a valid word
/// - `LengthMismatch` if the target's length differs from the session's
pub fn solve_word(config: SolveConfig, template: &Solver) -> Result<SolveResult, SolverError> {
    let target = Word::new(config.target)?;
    if target.len() != template.word_length() {
        return Err(SolverError::LengthMismatch {
            guess: template.current_guess().text().to_string(),
            other: target.text().to_string(),
        });
    }

    let mut solver = template.clone();
    let mut guesses = Vec::new();

    while solver.state() == SolverState::AwaitingFeedback
        && config.max_guesses.is_none_or(|max| guesses.len() < max)
    {
        let guess = solver.current_guess().clone();
        let candidates_before = solver.candidate_count();
        let bits_before = solver.bits_remaining();

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let refs: Vec<&Word> = solver.candidates().iter().collect();
            let metrics = calculate_metrics(&guess, &refs);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = FeedbackCode::compute(&guess, &target)?;
        solver.submit_feedback(feedback)?;
        debug!(%guess, %feedback, remaining = solver.candidate_count(), "solve step");

        guesses.push(GuessStep {
            candidates_after: solver
                .rounds()
                .last()
                .map_or(0, |round| round.candidates_after),
            word: guess,
            feedback,
            candidates_before,
            bits_before,
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        target,
        outcome: solver.state(),
        guesses,
    })
}
