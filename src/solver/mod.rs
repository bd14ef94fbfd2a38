//! Lingo solving algorithms
//!
//! Candidate filtering, entropy ranking and the session state machine that
//! ties them together.

mod engine;
pub mod entropy;
mod filter;

pub use engine::{Round, Solver, SolverState};
pub use entropy::{
    GuessMetrics, Ranking, RankingConfig, RankingCoverage, ScoredGuess, best_guess,
    calculate_metrics, rank,
};
pub use filter::filter_candidates;
