//! Benchmark command
//!
//! Replays the solver against every target word and collects statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Solver, SolverState};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// How many of the hardest words to keep
const HARDEST_KEPT: usize = 10;

/// Benchmark settings
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Test only the first N targets
    pub limit: Option<usize>,
    /// Give up on a target after this many guesses
    pub max_guesses: Option<usize>,
    pub show_progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Sessions whose feedback ruled out every candidate
    pub exhausted: usize,
    /// Sessions stopped by the guess limit
    pub unfinished: usize,
    /// Guesses spent on solved words
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of words solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Solved words needing the most guesses, worst first
    pub hardest: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against each of `targets`
///
/// Every target starts from a clone of `template`.
///
/// # Errors
/// Returns `LengthMismatch` if a target's length differs from the session's.
pub fn run_benchmark(
    template: &Solver,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, SolverError> {
    let targets = &targets[..config.limit.map_or(targets.len(), |n| n.min(targets.len()))];

    let progress = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        progress.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut solved_counts: Vec<(Word, usize)> = Vec::new();
    let mut exhausted = 0;
    let mut unfinished = 0;

    for (idx, target) in targets.iter().enumerate() {
        let mut solve_config = SolveConfig::new(target.text().to_string());
        solve_config.max_guesses = config.max_guesses;
        let result = solve_word(solve_config, template)?;

        match result.outcome {
            SolverState::Solved => solved_counts.push((result.target, result.guesses.len())),
            SolverState::Exhausted => exhausted += 1,
            SolverState::AwaitingFeedback => unfinished += 1,
        }

        if idx % 10 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            progress.set_message(format!("Avg: {avg:.2}"));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, guesses) in &solved_counts {
        *distribution.entry(*guesses).or_insert(0) += 1;
    }

    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest = solved_counts;
    hardest.sort_by(|(a, a_guesses), (b, b_guesses)| {
        b_guesses.cmp(a_guesses).then_with(|| a.cmp(b))
    });
    hardest.truncate(HARDEST_KEPT);

    let seconds = duration.as_secs_f64();
    let result = BenchmarkResult {
        total_words: targets.len(),
        solved,
        exhausted,
        unfinished,
        total_guesses,
        average_guesses,
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        hardest,
        duration,
        words_per_second: if seconds > 0.0 {
            targets.len() as f64 / seconds
        } else {
            0.0
        },
    };

    info!(
        words = result.total_words,
        solved = result.solved,
        exhausted = result.exhausted,
        average = result.average_guesses,
        "benchmark finished"
    );

    Ok(result)
}
