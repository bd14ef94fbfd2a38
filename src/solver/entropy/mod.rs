//! Entropy-based guess ranking
//!
//! Implements Shannon entropy over feedback distributions and the ranker
//! that turns it into a best-guess choice.

mod calculator;
mod ranker;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub(crate) use ranker::compare_scores;
pub use ranker::{Ranking, RankingConfig, RankingCoverage, ScoredGuess, best_guess, rank};
