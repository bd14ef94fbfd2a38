//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod precompute;
pub mod rank;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlaySummary, run_play};
pub use precompute::precompute_scores;
pub use rank::{RankReport, rank_guesses};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
