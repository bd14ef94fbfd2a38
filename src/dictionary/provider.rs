//! Sources of precomputed score tables

use super::ScoreTable;
use super::loader::load_score_table;
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::RankingConfig;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looks up the score table for a word length and optional anchor letter
pub trait ScoreProvider {
    /// # Errors
    /// Returns `MissingDictionary` when no table exists for the request, or
    /// whatever the underlying source fails with.
    fn score_table(
        &self,
        word_length: usize,
        anchor: Option<char>,
    ) -> Result<ScoreTable, SolverError>;
}

type TableKey = (usize, Option<char>);

fn table_key(word_length: usize, anchor: Option<char>) -> TableKey {
    (word_length, anchor.map(|letter| letter.to_ascii_lowercase()))
}

/// Tables held in memory, keyed by length and anchor
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    tables: FxHashMap<TableKey, ScoreTable>,
}

impl InMemoryProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Precompute tables for every length in `words`
    ///
    /// Each length gets a table over all its words plus one table per
    /// anchor letter that occurs.
    ///
    /// # Errors
    /// Propagates failures from [`ScoreTable::compute`].
    pub fn from_words(words: &[Word], config: &RankingConfig) -> Result<Self, SolverError> {
        let mut by_length: BTreeMap<usize, Vec<Word>> = BTreeMap::new();
        for word in words {
            by_length.entry(word.len()).or_default().push(word.clone());
        }

        let mut provider = Self::new();
        for group in by_length.values() {
            provider.insert(ScoreTable::compute(group, None, config)?);

            let mut anchors: Vec<char> = group.iter().map(Word::first_letter).collect();
            anchors.sort_unstable();
            anchors.dedup();
            for anchor in anchors {
                provider.insert(ScoreTable::compute(group, Some(anchor), config)?);
            }
        }

        Ok(provider)
    }

    /// Add a table, replacing any table for the same length and anchor
    pub fn insert(&mut self, table: ScoreTable) {
        let key = table_key(table.word_length(), table.anchor());
        self.tables.insert(key, table);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl ScoreProvider for InMemoryProvider {
    fn score_table(
        &self,
        word_length: usize,
        anchor: Option<char>,
    ) -> Result<ScoreTable, SolverError> {
        self.tables
            .get(&table_key(word_length, anchor))
            .cloned()
            .ok_or(SolverError::MissingDictionary {
                word_length,
                anchor,
            })
    }
}

/// Tables stored as CSV files named `<length>_<anchor>.csv` or
/// `<length>_all.csv` inside one directory
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    dir: PathBuf,
}

impl DirectoryProvider {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds (or would hold) the table for a length and anchor
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::dictionary::DirectoryProvider;
    /// use std::path::Path;
    ///
    /// let provider = DirectoryProvider::new("scores");
    /// assert_eq!(provider.path_for(6, Some('Q')), Path::new("scores/6_q.csv"));
    /// assert_eq!(provider.path_for(5, None), Path::new("scores/5_all.csv"));
    /// ```
    #[must_use]
    pub fn path_for(&self, word_length: usize, anchor: Option<char>) -> PathBuf {
        let suffix = anchor.map_or_else(
            || "all".to_string(),
            |letter| letter.to_ascii_lowercase().to_string(),
        );
        self.dir.join(format!("{word_length}_{suffix}.csv"))
    }
}

impl ScoreProvider for DirectoryProvider {
    fn score_table(
        &self,
        word_length: usize,
        anchor: Option<char>,
    ) -> Result<ScoreTable, SolverError> {
        let path = self.path_for(word_length, anchor);
        if !path.is_file() {
            debug!(path = %path.display(), "no score table on disk");
            return Err(SolverError::MissingDictionary {
                word_length,
                anchor,
            });
        }

        let table = load_score_table(&path, anchor)?;
        if table.word_length() != word_length {
            return Err(SolverError::MalformedScoreTable {
                path,
                line: 2,
                reason: format!(
                    "holds {}-letter words, expected {word_length}",
                    table.word_length()
                ),
            });
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::save_score_table;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn in_memory_provider_precomputes_anchor_tables() {
        let list = words(&["crane", "cater", "trace", "react", "lingos", "lagers"]);
        let provider = InMemoryProvider::from_words(&list, &RankingConfig::default()).unwrap();

        // 5 letters: all, c, t, r; 6 letters: all, l
        assert_eq!(provider.len(), 6);

        let full = provider.score_table(5, None).unwrap();
        assert_eq!(full.len(), 4);

        let anchored = provider.score_table(5, Some('C')).unwrap();
        assert_eq!(anchored.anchor(), Some('c'));
        assert_eq!(anchored.len(), 2);

        let six = provider.score_table(6, Some('l')).unwrap();
        assert_eq!(six.word_length(), 6);
    }

    #[test]
    fn in_memory_provider_reports_missing_tables() {
        let provider = InMemoryProvider::new();
        let err = provider.score_table(7, Some('x')).unwrap_err();
        assert!(matches!(
            err,
            SolverError::MissingDictionary {
                word_length: 7,
                anchor: Some('x')
            }
        ));
    }

    #[test]
    fn directory_provider_reads_saved_tables() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryProvider::new(dir.path());
        let list = words(&["lingo", "lager", "laser"]);
        let table = ScoreTable::compute(&list, Some('l'), &RankingConfig::default()).unwrap();

        save_score_table(provider.path_for(5, Some('l')), &table).unwrap();

        let loaded = provider.score_table(5, Some('l')).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.anchor(), Some('l'));
        assert_eq!(loaded.best().unwrap().0, table.best().unwrap().0);

        assert!(matches!(
            provider.score_table(5, None),
            Err(SolverError::MissingDictionary { .. })
        ));
    }

    #[test]
    fn directory_provider_checks_word_length() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectoryProvider::new(dir.path());
        let table = ScoreTable::new(vec![(Word::new("lingos").unwrap(), 1.0)], None).unwrap();

        // A six-letter table filed under five letters
        save_score_table(provider.path_for(5, None), &table).unwrap();

        assert!(matches!(
            provider.score_table(5, None),
            Err(SolverError::MalformedScoreTable { .. })
        ));
    }
}
