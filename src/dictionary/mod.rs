//! Word lists and precomputed opening scores
//!
//! Ranking the full dictionary for the opening guess is the most expensive
//! pass of a session. A [`ScoreTable`] holds that result for one word length
//! and optional anchor letter, so sessions can start from it instead.

pub mod loader;
mod provider;

pub use loader::{load_score_table, load_word_list, save_score_table};
pub use provider::{DirectoryProvider, InMemoryProvider, ScoreProvider};

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::RankingConfig;
use crate::solver::entropy::{compare_scores, rank};
use tracing::info;

/// Opening scores for every word of one length (and anchor)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    word_length: usize,
    anchor: Option<char>,
    entries: Vec<(Word, f64)>,
}

impl ScoreTable {
    /// Build a table from `(word, score)` pairs
    ///
    /// # Errors
    /// - `EmptyCandidateSet` if there are no entries
    /// - `LengthMismatch` if the words do not share one length
    /// - `AnchorMismatch` if a word does not start with `anchor`
    /// - `InvalidScore` for a negative, infinite or NaN score
    pub fn new(entries: Vec<(Word, f64)>, anchor: Option<char>) -> Result<Self, SolverError> {
        let anchor = anchor.map(|letter| letter.to_ascii_lowercase());
        let Some((first, _)) = entries.first() else {
            return Err(SolverError::EmptyCandidateSet);
        };
        let word_length = first.len();

        for (word, score) in &entries {
            if word.len() != word_length {
                return Err(SolverError::LengthMismatch {
                    guess: first.text().to_string(),
                    other: word.text().to_string(),
                });
            }
            if let Some(anchor) = anchor
                && !word.starts_with(anchor)
            {
                return Err(SolverError::AnchorMismatch {
                    word: word.text().to_string(),
                    anchor,
                });
            }
            if !score.is_finite() || *score < 0.0 {
                return Err(SolverError::InvalidScore {
                    word: word.text().to_string(),
                    score: *score,
                });
            }
        }

        Ok(Self {
            word_length,
            anchor,
            entries,
        })
    }

    /// Rank every word (restricted to `anchor`, if given) against the others
    ///
    /// Each word is scored, whatever guess cap or time budget `config`
    /// carries, because the table doubles as the session's candidate list.
    /// Only candidate sampling is honoured.
    ///
    /// # Errors
    /// - `EmptyCandidateSet` if no word matches the anchor
    /// - `LengthMismatch` if the words do not share one length
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::Word;
    /// use lingo_solver::dictionary::ScoreTable;
    /// use lingo_solver::solver::RankingConfig;
    ///
    /// let words: Vec<Word> = ["crane", "trace", "react", "cater"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let table = ScoreTable::compute(&words, Some('c'), &RankingConfig::default()).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert!(table.words().all(|w| w.starts_with('c')));
    /// ```
    pub fn compute(
        words: &[Word],
        anchor: Option<char>,
        config: &RankingConfig,
    ) -> Result<Self, SolverError> {
        let pool: Vec<Word> = words
            .iter()
            .filter(|word| anchor.is_none_or(|letter| word.starts_with(letter)))
            .cloned()
            .collect();

        let config = RankingConfig {
            max_guesses_evaluated: None,
            time_budget: None,
            ..*config
        };
        let ranking = rank(&pool, &pool, &config)?;
        let entries = ranking
            .scores()
            .iter()
            .map(|scored| (scored.word.clone(), scored.entropy))
            .collect();

        let table = Self::new(entries, anchor)?;
        info!(
            word_length = table.word_length,
            anchor = ?table.anchor,
            words = table.len(),
            "computed score table"
        );
        Ok(table)
    }

    /// Highest-scoring word; ties go to the lexicographically smallest
    #[must_use]
    pub fn best(&self) -> Option<(&Word, f64)> {
        self.entries
            .iter()
            .max_by(|(a, a_score), (b, b_score)| compare_scores(*a_score, a, *b_score, b))
            .map(|(word, score)| (word, *score))
    }

    /// Entries ordered best first, with the same tie-break as [`ScoreTable::best`]
    #[must_use]
    pub fn sorted(&self) -> Vec<(&Word, f64)> {
        let mut sorted: Vec<(&Word, f64)> =
            self.entries.iter().map(|(word, score)| (word, *score)).collect();
        sorted.sort_by(|(a, a_score), (b, b_score)| compare_scores(*b_score, b, *a_score, a));
        sorted
    }

    #[must_use]
    pub fn score(&self, word: &Word) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == word)
            .map(|(_, score)| *score)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|(word, _)| word)
    }

    #[must_use]
    pub fn entries(&self) -> &[(Word, f64)] {
        &self.entries
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn anchor(&self) -> Option<char> {
        self.anchor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a table built through [`ScoreTable::new`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
