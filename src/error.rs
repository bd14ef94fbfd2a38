//! Error types shared by the solver core and the dictionary layer

use crate::core::WordError;
use crate::solver::SolverState;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while scoring, filtering, ranking or
/// driving a session.
///
/// Each variant carries the offending input so a front end can decide
/// whether to prompt again or abandon the session. Nothing is retried.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("`{guess}` and `{other}` have different lengths")]
    LengthMismatch { guess: String, other: String },

    #[error("feedback `{input}` has {actual} symbols, expected {expected}")]
    InvalidFeedbackLength {
        input: String,
        expected: usize,
        actual: usize,
    },

    #[error("feedback `{input}` has invalid symbol {symbol:?} at position {position} (use 0, 1 or 2)")]
    InvalidFeedbackSymbol {
        input: String,
        symbol: char,
        position: usize,
    },

    #[error("cannot start a session without candidate words")]
    EmptyCandidateSet,

    #[error("no dictionary for {word_length}-letter words{}", anchor_suffix(.anchor))]
    MissingDictionary {
        word_length: usize,
        anchor: Option<char>,
    },

    #[error("score {score} for `{word}` is not a finite, non-negative number")]
    InvalidScore { word: String, score: f64 },

    #[error("`{word}` does not start with anchor '{anchor}'")]
    AnchorMismatch { word: String, anchor: char },

    #[error("session already finished ({state:?})")]
    SessionFinished { state: SolverState },

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    MalformedScoreTable {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

#[allow(clippy::ref_option)]
fn anchor_suffix(anchor: &Option<char>) -> String {
    anchor.map_or_else(String::new, |letter| format!(" starting with '{letter}'"))
}

impl SolverError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
