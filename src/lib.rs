//! Lingo Solver
//!
//! A constraint-elimination solver for Lingo and other Wordle-style games of
//! any word length, choosing each guess by expected information gain.
//!
//! # Quick Start
//!
//! ```rust
//! use lingo_solver::core::{FeedbackCode, Word};
//! use lingo_solver::solver::{RankingConfig, Solver, SolverState};
//!
//! let words: Vec<Word> = ["lingo", "lager", "laser", "liner"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let answer = Word::new("laser").unwrap();
//!
//! let mut solver = Solver::new(words, RankingConfig::default()).unwrap();
//! while solver.state() == SolverState::AwaitingFeedback {
//!     let feedback = FeedbackCode::compute(solver.current_guess(), &answer).unwrap();
//!     solver.submit_feedback(feedback).unwrap();
//! }
//! assert_eq!(solver.state(), SolverState::Solved);
//! assert_eq!(solver.current_guess(), &answer);
//! ```

// Core domain types
pub mod core;

// Error type shared across the crate
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists and precomputed scores
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolverError;
