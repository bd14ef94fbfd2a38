//! Entropy-based guess ranking
//!
//! Scores every guess in a pool by the entropy of the feedback it would
//! produce against the current candidates, and picks the best one.
//!
//! Ranking is `O(|pool| × |candidates| × L)`. Two optional caps bound that
//! cost and a time budget turns a full pass into a best-effort one. Whatever
//! was actually evaluated is reported back in [`RankingCoverage`].

use super::calculator::calculate_entropy;
use crate::core::Word;
use crate::error::SolverError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Limits on how much work a ranking pass may do
///
/// The default is full fidelity: every guess against every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingConfig {
    /// Evaluate only the first N guesses of the pool
    pub max_guesses_evaluated: Option<usize>,
    /// Estimate each distribution from N candidates sampled without replacement
    pub max_candidates_sampled: Option<usize>,
    /// Seed for candidate sampling; equal seeds sample equal subsets
    pub sample_seed: u64,
    /// Stop starting new guess evaluations after this long
    pub time_budget: Option<Duration>,
}

impl RankingConfig {
    /// Full fidelity, no caps
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_guesses_evaluated: None,
            max_candidates_sampled: None,
            sample_seed: 0,
            time_budget: None,
        }
    }

    /// Cap on evaluated guesses (at least 1)
    #[must_use]
    pub const fn with_max_guesses(mut self, max: usize) -> Self {
        self.max_guesses_evaluated = Some(if max == 0 { 1 } else { max });
        self
    }

    /// Cap on sampled candidates (at least 1)
    #[must_use]
    pub const fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates_sampled = Some(if max == 0 { 1 } else { max });
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.sample_seed = seed;
        self
    }

    #[must_use]
    pub const fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// How much of the requested work a ranking pass actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankingCoverage {
    pub guesses_total: usize,
    pub guesses_evaluated: usize,
    pub candidates_total: usize,
    pub candidates_sampled: usize,
}

impl RankingCoverage {
    /// True when every guess was scored against every candidate
    #[must_use]
    pub const fn is_exhaustive(&self) -> bool {
        self.guesses_evaluated == self.guesses_total
            && self.candidates_sampled == self.candidates_total
    }
}

/// A guess and its expected information in bits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGuess<'a> {
    pub word: &'a Word,
    pub entropy: f64,
}

/// Scores for a guess pool, in pool order
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    scores: Vec<ScoredGuess<'a>>,
    coverage: RankingCoverage,
}

impl<'a> Ranking<'a> {
    /// Scores of the evaluated guesses, in pool order
    #[must_use]
    pub fn scores(&self) -> &[ScoredGuess<'a>] {
        &self.scores
    }

    #[must_use]
    pub const fn coverage(&self) -> RankingCoverage {
        self.coverage
    }

    /// Score of a particular guess, if it was evaluated
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<f64> {
        self.scores
            .iter()
            .find(|scored| scored.word == word)
            .map(|scored| scored.entropy)
    }

    /// Highest score; ties go to the lexicographically smallest word
    #[must_use]
    pub fn best(&self) -> Option<ScoredGuess<'a>> {
        self.scores
            .iter()
            .copied()
            .max_by(|a, b| compare_scores(a.entropy, a.word, b.entropy, b.word))
    }

    /// All scores, best first, using the same tie-break as [`Ranking::best`]
    #[must_use]
    pub fn sorted(&self) -> Vec<ScoredGuess<'a>> {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| compare_scores(b.entropy, b.word, a.entropy, a.word));
        sorted
    }
}

/// Orders two scored words so that the better one compares greater
///
/// Higher score wins; on equal scores the lexicographically smaller word wins.
pub(crate) fn compare_scores(a_score: f64, a_word: &Word, b_score: f64, b_word: &Word) -> Ordering {
    a_score
        .total_cmp(&b_score)
        .then_with(|| b_word.cmp(a_word))
}

/// Score every guess in `guess_pool` against `candidates`
///
/// Guesses are scored in parallel; results come back in pool order so the
/// argmax never depends on completion order.
///
/// # Errors
/// Returns `LengthMismatch` if any guess or candidate differs in length from
/// the first guess of the pool.
///
/// # Examples
/// ```
/// use lingo_solver::core::Word;
/// use lingo_solver::solver::{RankingConfig, rank};
///
/// let words: Vec<Word> = ["crane", "trace", "react"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let ranking = rank(&words, &words, &RankingConfig::default()).unwrap();
/// assert!(ranking.coverage().is_exhaustive());
/// assert!(ranking.scores().iter().all(|s| s.entropy >= 0.0));
/// ```
pub fn rank<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
    config: &RankingConfig,
) -> Result<Ranking<'a>, SolverError> {
    let Some(reference) = guess_pool.first() else {
        return Ok(Ranking {
            scores: Vec::new(),
            coverage: RankingCoverage {
                candidates_total: candidates.len(),
                ..RankingCoverage::default()
            },
        });
    };

    if let Some(other) = guess_pool
        .iter()
        .chain(candidates)
        .find(|word| word.len() != reference.len())
    {
        return Err(SolverError::LengthMismatch {
            guess: reference.text().to_string(),
            other: other.text().to_string(),
        });
    }

    let pool_size = config
        .max_guesses_evaluated
        .map_or(guess_pool.len(), |cap| cap.clamp(1, guess_pool.len()));
    let pool = &guess_pool[..pool_size];
    let sampled = sample_candidates(candidates, config);

    let started = Instant::now();
    let scores: Vec<ScoredGuess<'a>> = pool
        .par_iter()
        .enumerate()
        .map(|(i, guess)| {
            let expired = config
                .time_budget
                .is_some_and(|budget| started.elapsed() >= budget);
            // The first guess always runs so there is an answer to fall back on
            if i > 0 && expired {
                return None;
            }
            Some(ScoredGuess {
                word: guess,
                entropy: calculate_entropy(guess, &sampled),
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let coverage = RankingCoverage {
        guesses_total: guess_pool.len(),
        guesses_evaluated: scores.len(),
        candidates_total: candidates.len(),
        candidates_sampled: sampled.len(),
    };

    if coverage.is_exhaustive() {
        debug!(
            guesses = coverage.guesses_total,
            candidates = coverage.candidates_total,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "ranked guess pool"
        );
    } else {
        warn!(
            guesses_evaluated = coverage.guesses_evaluated,
            guesses_total = coverage.guesses_total,
            candidates_sampled = coverage.candidates_sampled,
            candidates_total = coverage.candidates_total,
            "partial ranking, best guess is an estimate"
        );
    }

    Ok(Ranking { scores, coverage })
}

/// Convenience wrapper returning only the best guess of [`rank`]
///
/// Returns `Ok(None)` for an empty guess pool.
///
/// # Errors
/// Same as [`rank`].
pub fn best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
    config: &RankingConfig,
) -> Result<Option<ScoredGuess<'a>>, SolverError> {
    Ok(rank(guess_pool, candidates, config)?.best())
}

fn sample_candidates<'c>(candidates: &'c [Word], config: &RankingConfig) -> Vec<&'c Word> {
    match config.max_candidates_sampled {
        Some(cap) if cap < candidates.len() => {
            let mut rng = StdRng::seed_from_u64(config.sample_seed);
            let mut picked = index::sample(&mut rng, candidates.len(), cap.max(1)).into_vec();
            picked.sort_unstable();
            picked.into_iter().map(|i| &candidates[i]).collect()
        }
        _ => candidates.iter().collect(),
    }
}
