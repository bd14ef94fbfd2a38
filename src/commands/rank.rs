//! Ranking command
//!
//! Lists the best guesses for a candidate list.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{RankingConfig, RankingCoverage, rank};

/// Top of a ranking pass
#[derive(Debug, Clone)]
pub struct RankReport {
    /// Best first; ties in alphabetical order
    pub entries: Vec<(Word, f64)>,
    pub coverage: RankingCoverage,
}

/// Rank every candidate as a guess and keep the best `top`
///
/// # Errors
/// Returns `LengthMismatch` if the candidates do not share one length.
pub fn rank_guesses(
    candidates: &[Word],
    config: &RankingConfig,
    top: usize,
) -> Result<RankReport, SolverError> {
    let ranking = rank(candidates, candidates, config)?;
    let entries = ranking
        .sorted()
        .into_iter()
        .take(top)
        .map(|scored| (scored.word.clone(), scored.entropy))
        .collect();

    Ok(RankReport {
        entries,
        coverage: ranking.coverage(),
    })
}
