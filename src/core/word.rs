//! Word representation
//!
//! A Word is a lowercase ASCII word of any length up to `MAX_WORD_LENGTH`.
//! All words in one session share a length; comparing words of different
//! lengths is rejected by the feedback engine.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Longest supported word. Feedback codes pack one base-3 digit per letter
/// into a `u64`, and 3^32 still fits comfortably.
pub const MAX_WORD_LENGTH: usize = 32;

/// A fixed-length guess or candidate solution
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have between 1 and {MAX_WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input must be ASCII; it is lowercased before the remaining checks.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or greater than `MAX_WORD_LENGTH`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::Word;
    ///
    /// let word = Word::new("Trace").unwrap();
    /// assert_eq!(word.text(), "trace");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        // Checked before lowercasing: some non-ASCII letters lowercase to ASCII
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let text = text.to_ascii_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The anchor letter a Lingo round reveals up front
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        char::from(self.bytes()[0])
    }

    /// Check whether the word starts with the given anchor letter
    #[must_use]
    pub fn starts_with(&self, anchor: char) -> bool {
        self.first_letter() == anchor.to_ascii_lowercase()
    }

    /// Multiset of letters: how many times each letter occurs
    ///
    /// Used by the feedback engine to consume solution letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("lingos").unwrap().len(), 6);
        assert_eq!(Word::new("a".repeat(MAX_WORD_LENGTH)).unwrap().len(), 32);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LENGTH + 1)),
            Err(WordError::InvalidLength(33))
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_rejects_letters_that_lowercase_to_ascii() {
        // KELVIN SIGN lowercases to a plain 'k'
        assert_eq!(Word::new("\u{212A}nife"), Err(WordError::NonAscii));
        assert_eq!("\u{212A}NIFE".parse::<Word>(), Err(WordError::NonAscii));
    }

    #[test]
    fn word_anchor_letter() {
        let word = Word::new("lingo").unwrap();
        assert_eq!(word.first_letter(), 'l');
        assert!(word.starts_with('l'));
        assert!(word.starts_with('L'));
        assert!(!word.starts_with('k'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&6));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["trace", "crane", "react"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "react", "trace"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Lingo".parse().unwrap();
        assert_eq!(format!("{word}"), "lingo");
    }
}
