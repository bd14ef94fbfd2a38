//! Shannon entropy of a guess's feedback distribution
//!
//! Given a guess and a set of candidates, computes the expected information
//! the guess yields in bits.

use crate::core::{FeedbackCode, Word};
use rustc_hash::FxHashMap;

/// Metrics describing how a guess partitions the candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Largest partition (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback outcomes
    pub outcomes: usize,
}

/// Calculate the Shannon entropy of `guess` against `candidates`
///
/// Callers must ensure all words share one length.
///
/// # Formula
/// H = Σ p_f · log₂(1 / p_f), where p_f is the share of candidates that
/// produce feedback f.
///
/// # Examples
/// ```
/// use lingo_solver::core::Word;
/// use lingo_solver::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("trace").unwrap(), Word::new("react").unwrap()];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// // Two candidates, two different outcomes: exactly one bit
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let outcome_counts = group_by_feedback(guess, candidates);
    shannon_entropy(outcome_counts.into_values())
}

/// Tally how many candidates produce each feedback code
fn group_by_feedback(guess: &Word, candidates: &[&Word]) -> FxHashMap<FeedbackCode, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = FeedbackCode::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Entropy in bits of a distribution given by outcome counts
///
/// Counts are summed in ascending order so two guesses with the same
/// distribution score bit-for-bit equal, whatever the map iteration order.
///
/// # Properties
/// - Returns exactly 0.0 for a single outcome
/// - Maximised by a uniform distribution
/// - Always in `[0, log₂(n)]` for n outcomes
///
/// # Examples
/// ```
/// use lingo_solver::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001);
/// assert_eq!(shannon_entropy([7]), 0.0);
/// ```
#[must_use]
pub fn shannon_entropy(counts: impl IntoIterator<Item = usize>) -> f64 {
    let mut counts: Vec<usize> = counts.into_iter().filter(|&count| count > 0).collect();
    counts.sort_unstable();

    let total = counts.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .map(|&count| {
            let count = count as f64;
            let p = count / total;
            p * (total / count).log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining and worst case for one guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            outcomes: 0,
        };
    }

    let outcome_counts = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = outcome_counts
        .values()
        .map(|&count| {
            let count = count as f64;
            count * count / total
        })
        .sum();

    let max_partition = outcome_counts.values().copied().max().unwrap_or(0);
    let outcomes = outcome_counts.len();

    GuessMetrics {
        entropy: shannon_entropy(outcome_counts.into_values()),
        expected_remaining,
        max_partition,
        outcomes,
    }
}
