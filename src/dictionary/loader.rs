//! Word list and score table files
//!
//! Word lists are plain text, one word per line. Score tables are a small
//! CSV: a header line, then `word,score` rows.

use super::ScoreTable;
use crate::core::Word;
use crate::error::SolverError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Load words from a file
///
/// Blank lines and entries that are not valid words are skipped. Words
/// keep file order; mixed lengths are allowed here and sorted out by the
/// caller.
///
/// # Errors
/// Returns `SolverError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use lingo_solver::dictionary::load_word_list;
///
/// let words = load_word_list("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<Word>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SolverError::io(path, e))?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped invalid word list entries");
    }
    info!(path = %path.display(), words = words.len(), "loaded word list");

    Ok(words)
}

/// Load a score table written by [`save_score_table`]
///
/// The first line is a header and is not interpreted. Blank lines are
/// ignored; every other line must be `word,score`.
///
/// # Errors
/// - `SolverError::Io` if the file cannot be read
/// - `SolverError::MalformedScoreTable` for a bad row, naming its line
pub fn load_score_table(
    path: impl AsRef<Path>,
    anchor: Option<char>,
) -> Result<ScoreTable, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| SolverError::io(path, e))?;
    let malformed = |line: usize, reason: String| SolverError::MalformedScoreTable {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut entries: Vec<(Word, f64)> = Vec::new();
    for (index, raw) in content.lines().enumerate().skip(1) {
        let line_number = index + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        let Some((word, score)) = row.split_once(',') else {
            return Err(malformed(line_number, "expected `word,score`".to_string()));
        };
        let word = Word::new(word.trim()).map_err(|e| malformed(line_number, e.to_string()))?;
        let score: f64 = score
            .trim()
            .parse()
            .map_err(|_| malformed(line_number, format!("`{}` is not a number", score.trim())))?;

        if let Some((first, _)) = entries.first()
            && first.len() != word.len()
        {
            return Err(malformed(
                line_number,
                format!("`{word}` differs in length from `{first}`"),
            ));
        }
        if let Some(anchor) = anchor
            && !word.starts_with(anchor)
        {
            return Err(malformed(
                line_number,
                format!("`{word}` does not start with '{anchor}'"),
            ));
        }
        if !score.is_finite() || score < 0.0 {
            return Err(malformed(
                line_number,
                format!("score {score} is not a finite, non-negative number"),
            ));
        }

        entries.push((word, score));
    }

    if entries.is_empty() {
        return Err(malformed(1, "no score rows".to_string()));
    }

    let table = ScoreTable::new(entries, anchor)?;
    info!(path = %path.display(), words = table.len(), "loaded score table");
    Ok(table)
}

/// Write a score table as CSV, best word first
///
/// # Errors
/// Returns `SolverError::Io` if the file cannot be created or written.
pub fn save_score_table(path: impl AsRef<Path>, table: &ScoreTable) -> Result<(), SolverError> {
    let path = path.as_ref();
    let io_err = |e| SolverError::io(path, e);

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "word,score").map_err(io_err)?;
    for (word, score) in table.sorted() {
        writeln!(out, "{word},{score}").map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    info!(path = %path.display(), words = table.len(), "saved score table");
    Ok(())
}
