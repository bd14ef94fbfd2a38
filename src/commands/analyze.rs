//! Word analysis command
//!
//! Reports how well a single word splits the candidate list.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::GuessMetrics;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// `2^entropy`: the factor the candidate list shrinks by on average
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Whether the word could itself be the answer
    pub is_candidate: bool,
}

/// Analyze `word` as a guess against `candidates`
///
/// The word need not be a candidate; any valid word of the right length can
/// be analyzed.
///
/// # Errors
/// - `InvalidWord` if `word` is not a valid word
/// - `LengthMismatch` if its length differs from the candidates'
pub fn analyze_word(word: &str, candidates: &[Word]) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    if let Some(other) = candidates.iter().find(|c| c.len() != word.len()) {
        return Err(SolverError::LengthMismatch {
            guess: word.text().to_string(),
            other: other.text().to_string(),
        });
    }

    let candidate_refs: Vec<&Word> = candidates.iter().collect();
    let metrics = calculate_metrics(&word, &candidate_refs);

    Ok(AnalysisResult {
        is_candidate: candidates.contains(&word),
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: candidates.len(),
        metrics,
        word,
    })
}
