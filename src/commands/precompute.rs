//! Score table precomputation
//!
//! Ranks a dictionary once and stores the opening scores where a
//! [`DirectoryProvider`] will find them.

use crate::core::Word;
use crate::dictionary::{DirectoryProvider, ScoreTable, save_score_table};
use crate::error::SolverError;
use crate::solver::RankingConfig;
use std::fs;
use std::path::PathBuf;

/// Compute and save the table for one word length and optional anchor
///
/// Words of other lengths are ignored. Returns the path written.
///
/// # Errors
/// - `EmptyCandidateSet` if no word has the length (and anchor)
/// - `Io` if the directory or file cannot be written
pub fn precompute_scores(
    words: &[Word],
    word_length: usize,
    anchor: Option<char>,
    config: &RankingConfig,
    provider: &DirectoryProvider,
) -> Result<PathBuf, SolverError> {
    let words: Vec<Word> = words
        .iter()
        .filter(|word| word.len() == word_length)
        .cloned()
        .collect();
    let table = ScoreTable::compute(&words, anchor, config)?;

    fs::create_dir_all(provider.dir()).map_err(|e| SolverError::io(provider.dir(), e))?;
    let path = provider.path_for(word_length, anchor);
    save_score_table(&path, &table)?;
    Ok(path)
}
