//! Feedback scoring
//!
//! A feedback code records, per position, how a guess letter relates to the
//! hidden solution:
//! - 0 = Absent (letter not available in the solution)
//! - 1 = Present (letter in the solution, wrong position)
//! - 2 = Correct (letter in the right position)
//!
//! Codes are packed as base-3 integers where position `i` contributes
//! `digit × 3^i`, together with their length so codes of different word
//! lengths never compare equal.

use super::word::{MAX_WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    /// Base-3 digit used in the packed code and in textual input
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Inverse of [`Feedback::digit`]
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Correct),
            _ => None,
        }
    }

    /// Parse the textual form `0`, `1` or `2`
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_digit)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Absent => '0',
            Self::Present => '1',
            Self::Correct => '2',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode {
    value: u64,
    len: u8,
}

impl FeedbackCode {
    /// The winning code: every position `Correct`
    ///
    /// # Panics
    /// Panics if `len` exceeds `MAX_WORD_LENGTH`
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        assert!(
            len <= MAX_WORD_LENGTH,
            "feedback length {len} exceeds {MAX_WORD_LENGTH}"
        );
        Self {
            value: 3u64.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Build a code from explicit symbols
    ///
    /// # Panics
    /// Panics if more than `MAX_WORD_LENGTH` symbols are given
    #[must_use]
    pub fn from_symbols(symbols: &[Feedback]) -> Self {
        assert!(
            symbols.len() <= MAX_WORD_LENGTH,
            "feedback length {} exceeds {MAX_WORD_LENGTH}",
            symbols.len()
        );
        Self::encode(symbols)
    }

    fn encode(symbols: &[Feedback]) -> Self {
        let mut value = 0u64;
        let mut multiplier = 1u64;
        for symbol in symbols {
            value += u64::from(symbol.digit()) * multiplier;
            multiplier *= 3;
        }

        Self {
            value,
            len: symbols.len() as u8,
        }
    }

    /// Parse user-supplied feedback such as `"21020"`
    ///
    /// The input must contain exactly `expected_len` characters, each one of
    /// `0`, `1` or `2`.
    ///
    /// # Errors
    /// - `InvalidFeedbackLength` if the symbol count differs from `expected_len`
    /// - `InvalidFeedbackSymbol` for the first character outside `0`/`1`/`2`
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::{Feedback, FeedbackCode};
    ///
    /// let code = FeedbackCode::parse("21020", 5).unwrap();
    /// assert_eq!(code.get(0), Some(Feedback::Correct));
    /// assert_eq!(code.to_string(), "21020");
    ///
    /// assert!(FeedbackCode::parse("2102", 5).is_err());
    /// assert!(FeedbackCode::parse("21g20", 5).is_err());
    /// ```
    pub fn parse(input: &str, expected_len: usize) -> Result<Self, SolverError> {
        let actual = input.chars().count();
        if actual != expected_len || actual > MAX_WORD_LENGTH {
            return Err(SolverError::InvalidFeedbackLength {
                input: input.to_string(),
                expected: expected_len,
                actual,
            });
        }

        let symbols = input
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Feedback::from_char(symbol).ok_or_else(|| SolverError::InvalidFeedbackSymbol {
                    input: input.to_string(),
                    symbol,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::encode(&symbols))
    }

    /// Compute the feedback a `guess` receives against `solution`
    ///
    /// Duplicate letters are credited only as often as they remain
    /// unmatched in the solution:
    /// 1. Exact matches become `Correct` and consume one occurrence each
    /// 2. Left to right, remaining guess letters become `Present` while the
    ///    solution still has an unconsumed occurrence, else stay `Absent`
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("trace").unwrap();
    /// let code = FeedbackCode::compute(&guess, &solution).unwrap();
    ///
    /// // C(present) R(correct) A(correct) N(absent) E(correct)
    /// assert_eq!(code.to_string(), "12202");
    /// ```
    pub fn compute(guess: &Word, solution: &Word) -> Result<Self, SolverError> {
        if guess.len() != solution.len() {
            return Err(SolverError::LengthMismatch {
                guess: guess.text().to_string(),
                other: solution.text().to_string(),
            });
        }
        Ok(Self::calculate(guess, solution))
    }

    /// Unchecked [`FeedbackCode::compute`] for callers that validated lengths
    pub(crate) fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len());

        let len = guess.len();
        let mut result = [Feedback::Absent; MAX_WORD_LENGTH];
        let mut available = solution.char_counts();

        // Exact positions first
        for (i, (g, s)) in guess.bytes().iter().zip(solution.bytes()).enumerate() {
            if g == s {
                result[i] = Feedback::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count -= 1;
                }
            }
        }

        // Displaced letters, earlier positions claim occurrences first
        for (i, letter) in guess.bytes().iter().enumerate() {
            if result[i] == Feedback::Absent
                && let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::encode(&result[..len])
    }

    /// Raw packed value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of symbols, equal to the word length it was computed for
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::all_correct(self.len())
    }

    /// Symbol at `position`, or `None` past the end
    #[must_use]
    pub fn get(self, position: usize) -> Option<Feedback> {
        if position >= self.len() {
            return None;
        }
        let digit = (self.value / 3u64.pow(position as u32)) % 3;
        Feedback::from_digit(digit as u8)
    }

    /// Iterate symbols from the first position
    pub fn symbols(self) -> impl Iterator<Item = Feedback> {
        let mut rest = self.value;
        (0..self.len()).map(move |_| {
            let digit = (rest % 3) as u8;
            rest /= 3;
            Feedback::from_digit(digit).unwrap_or(Feedback::Absent)
        })
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.symbols().filter(|&s| s == Feedback::Correct).count()
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.symbols().filter(|&s| s == Feedback::Present).count()
    }

    /// Render as ⬜🟨🟩 squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols()
            .map(|symbol| match symbol {
                Feedback::Correct => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.as_char())?;
        }
        Ok(())
    }
}

/// Parses a digit string of any supported length; [`FeedbackCode::parse`]
/// also checks it against the session's word length
impl FromStr for FeedbackCode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count().clamp(1, MAX_WORD_LENGTH);
        Self::parse(s, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_codes_are_accepted() {
        let code = FeedbackCode::all_correct(MAX_WORD_LENGTH);
        assert_eq!(code.len(), MAX_WORD_LENGTH);
        assert!(code.is_all_correct());

        let symbols = [Feedback::Present; MAX_WORD_LENGTH];
        assert_eq!(FeedbackCode::from_symbols(&symbols).count_present(), MAX_WORD_LENGTH);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn all_correct_rejects_overlong_length() {
        let _ = FeedbackCode::all_correct(MAX_WORD_LENGTH + 1);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn from_symbols_rejects_overlong_input() {
        let symbols = vec![Feedback::Correct; MAX_WORD_LENGTH + 1];
        let _ = FeedbackCode::from_symbols(&symbols);
    }

    #[test]
    fn from_str_takes_length_from_input() {
        let code: FeedbackCode = "2101".parse().unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.count_correct(), 1);
        assert_eq!(code.count_present(), 2);

        assert!(matches!(
            "".parse::<FeedbackCode>(),
            Err(SolverError::InvalidFeedbackLength { actual: 0, .. })
        ));
        assert!(matches!(
            "21x".parse::<FeedbackCode>(),
            Err(SolverError::InvalidFeedbackSymbol {
                symbol: 'x',
                position: 2,
                ..
            })
        ));
        assert!("2".repeat(MAX_WORD_LENGTH + 1).parse::<FeedbackCode>().is_err());
    }

    fn code(guess: &str, solution: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let solution = Word::new(solution).unwrap();
        FeedbackCode::compute(&guess, &solution).unwrap().to_string()
    }

    #[test]
    fn all_correct_constant() {
        let five = FeedbackCode::all_correct(5);
        assert_eq!(five.value(), 242);
        assert!(five.is_all_correct());
        assert_eq!(five.count_correct(), 5);
        assert_eq!(five.to_string(), "22222");

        let six = FeedbackCode::all_correct(6);
        assert_eq!(six.value(), 728);
        assert_ne!(five, six);
    }

    #[test]
    fn same_word_is_all_correct() {
        for text in ["crane", "lingos", "aaaaa", "zz", "q"] {
            let word = Word::new(text).unwrap();
            let code = FeedbackCode::compute(&word, &word).unwrap();
            assert!(code.is_all_correct(), "{text}");
            assert_eq!(code.len(), word.len());
        }
    }

    #[test]
    fn all_absent() {
        assert_eq!(code("abcde", "fghij"), "00000");
    }

    #[test]
    fn exact_and_displaced_letters() {
        assert_eq!(code("crane", "trace"), "12202");
        assert_eq!(code("crane", "react"), "11201");
    }

    #[test]
    fn shuffled_letters_without_duplicates() {
        // Positions 2 and 3 line up exactly, the rest are displaced
        assert_eq!(code("abcde", "aecdb"), "21221");
    }

    #[test]
    fn duplicate_letters_in_guess_limited_by_solution() {
        // SPEED vs ERASE: both E's find an E, S finds the S
        assert_eq!(code("speed", "erase"), "10110");
        // GEESE vs CREEP: the exact E consumes one occurrence, one E left
        assert_eq!(code("geese", "creep"), "01200");
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_displaced_letter() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining one
        assert_eq!(code("robot", "floor"), "11020");
        // The only L in PILOT is matched exactly, so the leading L is absent
        assert_eq!(code("lilac", "pilot"), "02200");
    }

    #[test]
    fn earlier_positions_claim_occurrences_first() {
        // One E available: the first displaced E gets it
        assert_eq!(code("eerie", "alert"), "10100");
    }

    #[test]
    fn six_letter_words() {
        assert_eq!(code("lingos", "lingos"), "222222");
        assert_eq!(code("banaan", "ananas"), "011121");
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let guess = Word::new("crane").unwrap();
        let solution = Word::new("lingos").unwrap();
        let err = FeedbackCode::compute(&guess, &solution).unwrap_err();
        assert!(matches!(
            err,
            SolverError::LengthMismatch { ref guess, ref other } if guess == "crane" && other == "lingos"
        ));
    }

    #[test]
    fn parse_valid() {
        let parsed = FeedbackCode::parse("12202", 5).unwrap();
        let computed = FeedbackCode::compute(
            &Word::new("crane").unwrap(),
            &Word::new("trace").unwrap(),
        )
        .unwrap();
        assert_eq!(parsed, computed);
        assert_eq!(parsed.count_correct(), 3);
        assert_eq!(parsed.count_present(), 1);
    }

    #[test]
    fn parse_wrong_length() {
        let err = FeedbackCode::parse("2202", 5).unwrap_err();
        assert!(matches!(
            err,
            SolverError::InvalidFeedbackLength {
                expected: 5,
                actual: 4,
                ..
            }
        ));
        assert!(FeedbackCode::parse("", 5).is_err());
        assert!(FeedbackCode::parse("222222", 5).is_err());
    }

    #[test]
    fn parse_invalid_symbol() {
        let err = FeedbackCode::parse("22302", 5).unwrap_err();
        assert!(matches!(
            err,
            SolverError::InvalidFeedbackSymbol {
                symbol: '3',
                position: 2,
                ..
            }
        ));
        assert!(FeedbackCode::parse("GY-GY", 5).is_err());
    }

    #[test]
    fn get_and_symbols() {
        let parsed = FeedbackCode::parse("21020", 5).unwrap();
        assert_eq!(parsed.get(0), Some(Feedback::Correct));
        assert_eq!(parsed.get(1), Some(Feedback::Present));
        assert_eq!(parsed.get(2), Some(Feedback::Absent));
        assert_eq!(parsed.get(5), None);
        assert_eq!(
            FeedbackCode::from_symbols(&parsed.symbols().collect::<Vec<_>>()),
            parsed
        );
    }

    #[test]
    fn emoji_rendering() {
        let parsed = FeedbackCode::parse("21020", 5).unwrap();
        assert_eq!(parsed.to_emoji(), "🟩🟨⬜🟩⬜");
    }
}
