//! Solver session state machine
//!
//! A [`Solver`] owns everything one Lingo round needs: the word length, the
//! remaining candidates, the current recommendation and the history of
//! feedback. Sessions share nothing, so any number can run side by side.
//!
//! ```text
//! setup ──► AwaitingFeedback ──► Solved
//!                 │   ▲
//!                 │   └── feedback narrows candidates, new guess
//!                 └─────► Exhausted
//! ```

use super::entropy::{Ranking, RankingConfig, RankingCoverage, rank};
use super::filter::filter_candidates;
use crate::core::{FeedbackCode, Word};
use crate::dictionary::ScoreTable;
use crate::error::SolverError;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// A guess has been recommended; waiting for its feedback
    AwaitingFeedback,
    /// The all-correct code came back for the current guess
    Solved,
    /// Feedback ruled out every candidate; the session needs a restart
    Exhausted,
}

impl SolverState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// One completed guess/feedback exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: FeedbackCode,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State restored by [`Solver::undo`]
#[derive(Debug, Clone)]
struct Snapshot {
    candidates: Vec<Word>,
    current_guess: Word,
    ranked: Vec<(Word, f64)>,
    coverage: Option<RankingCoverage>,
}

/// A single solving session
#[derive(Debug, Clone)]
pub struct Solver {
    word_length: usize,
    config: RankingConfig,
    candidates: Vec<Word>,
    current_guess: Word,
    state: SolverState,
    /// Scored remaining words, best first
    ranked: Vec<(Word, f64)>,
    coverage: Option<RankingCoverage>,
    rounds: Vec<Round>,
    snapshots: Vec<Snapshot>,
}

impl Solver {
    /// Start a session by ranking the whole initial candidate set
    ///
    /// Duplicate words are dropped (first occurrence kept).
    ///
    /// # Errors
    /// - `EmptyCandidateSet` if `candidates` is empty
    /// - `LengthMismatch` if the words do not all share one length
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::{FeedbackCode, Word};
    /// use lingo_solver::solver::{RankingConfig, Solver, SolverState};
    ///
    /// let words: Vec<Word> = ["crane", "trace", "react"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut solver = Solver::new(words, RankingConfig::default()).unwrap();
    /// assert_eq!(solver.current_guess().text(), "crane");
    ///
    /// let state = solver.submit_feedback_str("12202").unwrap();
    /// assert_eq!(state, SolverState::AwaitingFeedback);
    /// assert_eq!(solver.current_guess().text(), "trace");
    ///
    /// let state = solver.submit_feedback_str("22222").unwrap();
    /// assert_eq!(state, SolverState::Solved);
    /// ```
    pub fn new(candidates: Vec<Word>, config: RankingConfig) -> Result<Self, SolverError> {
        let candidates = dedup_candidates(candidates);
        let Some(first) = candidates.first() else {
            return Err(SolverError::EmptyCandidateSet);
        };
        let word_length = first.len();

        let ranking = rank(&candidates, &candidates, &config)?;
        let coverage = Some(ranking.coverage());
        let ranked = ranked_words(&ranking);
        let Some((best, _)) = ranked.first() else {
            return Err(SolverError::EmptyCandidateSet);
        };
        let current_guess = best.clone();

        info!(
            word_length,
            candidates = candidates.len(),
            guess = %current_guess,
            "session started"
        );

        Ok(Self {
            word_length,
            config,
            candidates,
            current_guess,
            state: SolverState::AwaitingFeedback,
            ranked,
            coverage,
            rounds: Vec::new(),
            snapshots: Vec::new(),
        })
    }

    /// Start a session from precomputed scores
    ///
    /// The table's words become the candidates and its best-scoring word the
    /// first guess, so no ranking pass is spent on the largest set.
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` if the table is empty.
    pub fn with_scores(table: &ScoreTable, config: RankingConfig) -> Result<Self, SolverError> {
        let Some((best, score)) = table.best() else {
            return Err(SolverError::EmptyCandidateSet);
        };
        let current_guess = best.clone();
        let candidates = dedup_candidates(table.words().cloned().collect());
        let mut seen = FxHashSet::default();
        let ranked = table
            .sorted()
            .into_iter()
            .filter(|(word, _)| seen.insert(*word))
            .map(|(word, score)| (word.clone(), score))
            .collect();

        info!(
            word_length = table.word_length(),
            candidates = candidates.len(),
            guess = %current_guess,
            score,
            "session started from precomputed scores"
        );

        Ok(Self {
            word_length: table.word_length(),
            config,
            candidates,
            current_guess,
            state: SolverState::AwaitingFeedback,
            ranked,
            coverage: None,
            rounds: Vec::new(),
            snapshots: Vec::new(),
        })
    }

    /// Parse textual feedback (`0`/`1`/`2` per letter) and apply it
    ///
    /// # Errors
    /// - `InvalidFeedbackLength` / `InvalidFeedbackSymbol` for malformed input;
    ///   the session is left untouched so the caller can ask again
    /// - `SessionFinished` if the session already reached a terminal state
    pub fn submit_feedback_str(&mut self, input: &str) -> Result<SolverState, SolverError> {
        self.ensure_active()?;
        let feedback = FeedbackCode::parse(input, self.word_length)?;
        self.submit_feedback(feedback)
    }

    /// Apply feedback for the current guess and advance the session
    ///
    /// - All-correct feedback moves to `Solved` without ranking
    /// - Feedback no candidate can produce moves to `Exhausted`
    /// - A single remaining candidate becomes the guess without ranking
    /// - Otherwise the remaining candidates are ranked for the next guess
    ///
    /// # Errors
    /// - `InvalidFeedbackLength` if the code does not match the word length
    /// - `SessionFinished` if the session already reached a terminal state
    pub fn submit_feedback(&mut self, feedback: FeedbackCode) -> Result<SolverState, SolverError> {
        self.ensure_active()?;
        if feedback.len() != self.word_length {
            return Err(SolverError::InvalidFeedbackLength {
                input: feedback.to_string(),
                expected: self.word_length,
                actual: feedback.len(),
            });
        }

        self.apply_feedback(self.current_guess.clone(), feedback)
    }

    /// Apply feedback for a word the player chose instead of the recommendation
    ///
    /// Candidates are filtered against `guess`, and all-correct feedback
    /// solves the session with `guess` as the answer. [`Solver::undo`]
    /// brings back the recommendation that was skipped.
    ///
    /// # Errors
    /// - `LengthMismatch` if `guess` does not have the session's word length
    /// - `InvalidFeedbackLength` if the code does not match the word length
    /// - `SessionFinished` if the session already reached a terminal state
    ///
    /// # Examples
    /// ```
    /// use lingo_solver::core::{FeedbackCode, Word};
    /// use lingo_solver::solver::{RankingConfig, Solver};
    ///
    /// let words: Vec<Word> = ["crane", "trace", "react"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let mut solver = Solver::new(words, RankingConfig::default()).unwrap();
    ///
    /// let react = Word::new("react").unwrap();
    /// let feedback = FeedbackCode::parse("11221", 5).unwrap();
    /// solver.submit_feedback_for(&react, feedback).unwrap();
    /// assert_eq!(solver.current_guess().text(), "trace");
    /// ```
    pub fn submit_feedback_for(
        &mut self,
        guess: &Word,
        feedback: FeedbackCode,
    ) -> Result<SolverState, SolverError> {
        self.ensure_active()?;
        if guess.len() != self.word_length {
            return Err(SolverError::LengthMismatch {
                guess: guess.text().to_string(),
                other: self.current_guess.text().to_string(),
            });
        }
        if feedback.len() != self.word_length {
            return Err(SolverError::InvalidFeedbackLength {
                input: feedback.to_string(),
                expected: self.word_length,
                actual: feedback.len(),
            });
        }
        self.apply_feedback(guess.clone(), feedback)
    }

    /// Step back one round, restoring candidates, guess and state
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.snapshots.pop() else {
            return false;
        };
        self.rounds.pop();
        self.candidates = snapshot.candidates;
        self.current_guess = snapshot.current_guess;
        self.ranked = snapshot.ranked;
        self.coverage = snapshot.coverage;
        self.state = SolverState::AwaitingFeedback;
        debug!(guess = %self.current_guess, "undid last round");
        true
    }

    /// Recommended guess; after `Solved` this is the answer
    #[must_use]
    pub const fn current_guess(&self) -> &Word {
        &self.current_guess
    }

    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Exactly one candidate remains, so the current guess is the answer
    #[must_use]
    pub fn is_determined(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Residual uncertainty, `log2(|candidates|)`
    ///
    /// Zero for one candidate, and also reported as zero once exhausted.
    #[must_use]
    pub fn bits_remaining(&self) -> f64 {
        if self.candidates.len() <= 1 {
            0.0
        } else {
            (self.candidates.len() as f64).log2()
        }
    }

    /// Completed rounds, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Remaining words with their scores, best first
    ///
    /// Words a capped ranking pass skipped are not listed. A single remaining
    /// candidate is listed with score 0; an exhausted session lists nothing.
    #[must_use]
    pub fn ranked_candidates(&self) -> &[(Word, f64)] {
        &self.ranked
    }

    /// Coverage of the ranking pass behind the current guess
    ///
    /// `None` when the guess did not come from a ranking pass (precomputed
    /// scores, a single remaining candidate, or a solved session).
    #[must_use]
    pub const fn last_coverage(&self) -> Option<RankingCoverage> {
        self.coverage
    }

    #[must_use]
    pub const fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Lengths are checked by the callers
    fn apply_feedback(
        &mut self,
        guess: Word,
        feedback: FeedbackCode,
    ) -> Result<SolverState, SolverError> {
        let candidates_before = self.candidates.len();

        if feedback.is_all_correct() {
            self.push_snapshot();
            self.rounds.push(Round {
                guess: guess.clone(),
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            self.candidates = vec![guess.clone()];
            self.ranked = vec![(guess.clone(), 0.0)];
            self.current_guess = guess;
            self.coverage = None;
            self.state = SolverState::Solved;
            info!(answer = %self.current_guess, rounds = self.rounds.len(), "solved");
            return Ok(self.state);
        }

        let remaining = filter_candidates(&self.candidates, &guess, feedback)?;
        debug!(
            %guess,
            %feedback,
            before = candidates_before,
            after = remaining.len(),
            "filtered candidates"
        );

        self.push_snapshot();
        self.rounds.push(Round {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after: remaining.len(),
        });
        self.candidates = remaining;
        self.current_guess = guess;

        match self.candidates.as_slice() {
            [] => {
                self.ranked.clear();
                self.coverage = None;
                self.state = SolverState::Exhausted;
                warn!(
                    guess = %self.current_guess,
                    %feedback,
                    "no candidate matches the feedback"
                );
            }
            [only] => {
                self.current_guess = only.clone();
                self.ranked = vec![(only.clone(), 0.0)];
                self.coverage = None;
            }
            _ => {
                let ranking = rank(&self.candidates, &self.candidates, &self.config)?;
                let ranked = ranked_words(&ranking);
                if let Some((best, _)) = ranked.first() {
                    self.current_guess = best.clone();
                }
                self.coverage = Some(ranking.coverage());
                self.ranked = ranked;
            }
        }

        Ok(self.state)
    }

    fn ensure_active(&self) -> Result<(), SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::SessionFinished { state: self.state });
        }
        Ok(())
    }

    fn push_snapshot(&mut self) {
        self.snapshots.push(Snapshot {
            candidates: self.candidates.clone(),
            current_guess: self.current_guess.clone(),
            ranked: self.ranked.clone(),
            coverage: self.coverage,
        });
    }
}

fn ranked_words(ranking: &Ranking<'_>) -> Vec<(Word, f64)> {
    ranking
        .sorted()
        .into_iter()
        .map(|scored| (scored.word.clone(), scored.entropy))
        .collect()
}

fn dedup_candidates(candidates: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    candidates
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn toy_set() -> Vec<Word> {
        words(&["crane", "trace", "react"])
    }

    fn larger_set() -> Vec<Word> {
        words(&[
            "crane", "trace", "react", "slate", "irate", "crate", "grate", "caret", "cater",
            "eerie", "speed", "creep", "robot", "floor", "pilot", "lilac",
        ])
    }

    /// Play a full session against a known answer, returning the final state
    /// and the number of guesses used
    fn play_out(candidates: Vec<Word>, answer: &Word) -> (SolverState, usize) {
        let mut solver = Solver::new(candidates, RankingConfig::default()).unwrap();
        loop {
            let feedback = FeedbackCode::compute(solver.current_guess(), answer).unwrap();
            let state = solver.submit_feedback(feedback).unwrap();
            if state.is_terminal() {
                return (state, solver.rounds().len());
            }
        }
    }

    #[test]
    fn setup_ranks_initial_guess() {
        let solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();

        assert_eq!(solver.state(), SolverState::AwaitingFeedback);
        assert_eq!(solver.word_length(), 5);
        assert_eq!(solver.candidate_count(), 3);
        // All three split the set three ways; the tie goes to CRANE
        assert_eq!(solver.current_guess().text(), "crane");
        assert!((solver.bits_remaining() - 3f64.log2()).abs() < 1e-12);
        assert!(solver.last_coverage().unwrap().is_exhaustive());
    }

    #[test]
    fn setup_rejects_empty_candidates() {
        let err = Solver::new(Vec::new(), RankingConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::EmptyCandidateSet));
    }

    #[test]
    fn setup_rejects_mixed_lengths() {
        let err = Solver::new(words(&["crane", "lingos"]), RankingConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::LengthMismatch { .. }));
    }

    #[test]
    fn setup_drops_duplicate_words() {
        let solver = Solver::new(
            words(&["crane", "trace", "crane", "react", "trace"]),
            RankingConfig::default(),
        )
        .unwrap();
        assert_eq!(solver.candidates(), toy_set().as_slice());
    }

    #[test]
    fn feedback_narrows_to_consistent_words() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        let answer = Word::new("trace").unwrap();
        let feedback = FeedbackCode::compute(solver.current_guess(), &answer).unwrap();

        let state = solver.submit_feedback(feedback).unwrap();

        assert_eq!(state, SolverState::AwaitingFeedback);
        assert!(solver.candidates().contains(&answer));
        let guess = Word::new("crane").unwrap();
        for word in solver.candidates() {
            assert_eq!(FeedbackCode::compute(&guess, word).unwrap(), feedback);
        }
        assert!(solver.is_determined());
        assert_eq!(solver.current_guess(), &answer);
        assert_eq!(solver.bits_remaining(), 0.0);
        // A single candidate is taken as-is, no ranking pass
        assert!(solver.last_coverage().is_none());

        let round = &solver.rounds()[0];
        assert_eq!(round.guess.text(), "crane");
        assert_eq!(round.candidates_before, 3);
        assert_eq!(round.candidates_after, 1);
    }

    #[test]
    fn all_correct_feedback_solves_immediately() {
        let mut solver = Solver::new(larger_set(), RankingConfig::default()).unwrap();
        let guess = solver.current_guess().clone();

        let state = solver.submit_feedback_str(&"2".repeat(5)).unwrap();

        assert_eq!(state, SolverState::Solved);
        assert_eq!(solver.current_guess(), &guess);
        assert_eq!(solver.candidates(), std::slice::from_ref(&guess));
        assert!(solver.last_coverage().is_none());
        assert_eq!(solver.rounds().len(), 1);
    }

    #[test]
    fn inconsistent_feedback_exhausts_session() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();

        // Every word in the set shares letters with CRANE
        let state = solver.submit_feedback_str("00000").unwrap();

        assert_eq!(state, SolverState::Exhausted);
        assert_eq!(solver.candidate_count(), 0);
        assert_eq!(solver.bits_remaining(), 0.0);
        assert_eq!(solver.rounds()[0].candidates_after, 0);
    }

    #[test]
    fn terminal_states_reject_more_feedback() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        solver.submit_feedback_str("00000").unwrap();

        let err = solver.submit_feedback_str("22222").unwrap_err();
        assert!(matches!(
            err,
            SolverError::SessionFinished {
                state: SolverState::Exhausted
            }
        ));

        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        solver.submit_feedback_str("22222").unwrap();
        let err = solver.submit_feedback_str("22222").unwrap_err();
        assert!(matches!(
            err,
            SolverError::SessionFinished {
                state: SolverState::Solved
            }
        ));
    }

    #[test]
    fn malformed_feedback_leaves_session_untouched() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();

        assert!(matches!(
            solver.submit_feedback_str("2220"),
            Err(SolverError::InvalidFeedbackLength { .. })
        ));
        assert!(matches!(
            solver.submit_feedback_str("22a20"),
            Err(SolverError::InvalidFeedbackSymbol { symbol: 'a', .. })
        ));
        assert!(matches!(
            solver.submit_feedback(FeedbackCode::all_correct(6)),
            Err(SolverError::InvalidFeedbackLength {
                expected: 5,
                actual: 6,
                ..
            })
        ));

        assert_eq!(solver.state(), SolverState::AwaitingFeedback);
        assert_eq!(solver.candidate_count(), 3);
        assert!(solver.rounds().is_empty());
    }

    #[test]
    fn undo_restores_previous_round() {
        let mut solver = Solver::new(larger_set(), RankingConfig::default()).unwrap();
        let first_guess = solver.current_guess().clone();
        let answer = Word::new("pilot").unwrap();
        let feedback = FeedbackCode::compute(&first_guess, &answer).unwrap();

        solver.submit_feedback(feedback).unwrap();
        assert!(solver.candidate_count() < larger_set().len());

        assert!(solver.undo());
        assert_eq!(solver.current_guess(), &first_guess);
        assert_eq!(solver.candidate_count(), larger_set().len());
        assert!(solver.rounds().is_empty());
        assert!(!solver.undo());
    }

    #[test]
    fn undo_leaves_exhausted_state() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        solver.submit_feedback_str("00000").unwrap();
        assert_eq!(solver.state(), SolverState::Exhausted);

        assert!(solver.undo());
        assert_eq!(solver.state(), SolverState::AwaitingFeedback);
        assert_eq!(solver.candidate_count(), 3);
        assert_eq!(
            solver.submit_feedback_str("12202").unwrap(),
            SolverState::AwaitingFeedback
        );
    }

    #[test]
    fn chosen_guess_filters_with_that_word() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        assert_eq!(solver.current_guess().text(), "crane");
        let react = Word::new("react").unwrap();
        let answer = Word::new("trace").unwrap();
        let feedback = FeedbackCode::compute(&react, &answer).unwrap();
        assert_eq!(feedback.to_string(), "11221");

        let state = solver.submit_feedback_for(&react, feedback).unwrap();

        assert_eq!(state, SolverState::AwaitingFeedback);
        // Read against CRANE the same code would have ruled out every word
        assert_eq!(solver.candidates(), std::slice::from_ref(&answer));
        assert_eq!(solver.current_guess(), &answer);
        assert_eq!(solver.rounds()[0].guess, react);
        assert_eq!(solver.rounds()[0].candidates_after, 1);

        assert!(solver.undo());
        assert_eq!(solver.current_guess().text(), "crane");
        assert_eq!(solver.candidate_count(), 3);
    }

    #[test]
    fn chosen_guess_can_solve_the_session() {
        let mut solver = Solver::new(larger_set(), RankingConfig::default()).unwrap();
        let pilot = Word::new("pilot").unwrap();

        let state = solver.submit_feedback_for(&pilot, FeedbackCode::all_correct(5)).unwrap();

        assert_eq!(state, SolverState::Solved);
        assert_eq!(solver.current_guess(), &pilot);
        assert_eq!(solver.candidates(), std::slice::from_ref(&pilot));
        assert_eq!(solver.ranked_candidates(), &[(pilot.clone(), 0.0)]);
        assert_eq!(solver.rounds()[0].guess, pilot);
    }

    #[test]
    fn chosen_guess_is_validated() {
        let mut solver = Solver::new(toy_set(), RankingConfig::default()).unwrap();

        let err = solver
            .submit_feedback_for(&Word::new("lingos").unwrap(), FeedbackCode::all_correct(6))
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::LengthMismatch { ref guess, .. } if guess == "lingos"
        ));

        let err = solver
            .submit_feedback_for(&Word::new("react").unwrap(), FeedbackCode::all_correct(4))
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::InvalidFeedbackLength {
                expected: 5,
                actual: 4,
                ..
            }
        ));
        assert!(solver.rounds().is_empty());
        assert_eq!(solver.candidate_count(), 3);

        solver.submit_feedback_str("22222").unwrap();
        let err = solver
            .submit_feedback_for(&Word::new("react").unwrap(), FeedbackCode::all_correct(5))
            .unwrap_err();
        assert!(matches!(err, SolverError::SessionFinished { .. }));
    }

    #[test]
    fn ranked_candidates_follow_the_session() {
        let mut solver = Solver::new(larger_set(), RankingConfig::default()).unwrap();

        let ranked = solver.ranked_candidates();
        assert_eq!(ranked.len(), larger_set().len());
        assert_eq!(&ranked[0].0, solver.current_guess());
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }

        let toy = toy_set();
        let mut small = Solver::new(toy, RankingConfig::default()).unwrap();
        let order: Vec<&str> = small
            .ranked_candidates()
            .iter()
            .map(|(word, _)| word.text())
            .collect();
        // Equal scores are listed alphabetically
        assert_eq!(order, ["crane", "react", "trace"]);

        small.submit_feedback_str("12202").unwrap();
        assert_eq!(small.ranked_candidates(), &[(Word::new("trace").unwrap(), 0.0)]);
        assert!(small.undo());
        assert_eq!(small.ranked_candidates().len(), 3);

        solver.submit_feedback_str("00000").unwrap();
        if solver.state() == SolverState::Exhausted {
            assert!(solver.ranked_candidates().is_empty());
        }
        assert_eq!(solver.ranked_candidates().len(), solver.candidate_count());
    }

    #[test]
    fn every_answer_is_solved() {
        let candidates = larger_set();
        for answer in &candidates {
            let (state, guesses) = play_out(candidates.clone(), answer);
            assert_eq!(state, SolverState::Solved, "{answer}");
            assert!(guesses <= candidates.len(), "{answer} took {guesses}");
        }
    }

    #[test]
    fn capped_ranking_reports_partial_coverage() {
        let config = RankingConfig::default().with_max_guesses(2);
        let solver = Solver::new(larger_set(), config).unwrap();

        let coverage = solver.last_coverage().unwrap();
        assert_eq!(coverage.guesses_evaluated, 2);
        assert!(!coverage.is_exhaustive());
        assert_eq!(solver.config().max_guesses_evaluated, Some(2));
    }

    #[test]
    fn sessions_start_from_precomputed_scores() {
        let table = ScoreTable::new(
            vec![
                (Word::new("trace").unwrap(), 1.2),
                (Word::new("react").unwrap(), 1.5),
                (Word::new("crane").unwrap(), 1.5),
            ],
            None,
        )
        .unwrap();

        let mut solver = Solver::with_scores(&table, RankingConfig::default()).unwrap();
        // Equal top scores: lexicographically smallest wins
        assert_eq!(solver.current_guess().text(), "crane");
        assert_eq!(solver.candidate_count(), 3);
        assert!(solver.last_coverage().is_none());
        let listed: Vec<(&str, f64)> = solver
            .ranked_candidates()
            .iter()
            .map(|(word, score)| (word.text(), *score))
            .collect();
        assert_eq!(listed, [("crane", 1.5), ("react", 1.5), ("trace", 1.2)]);

        assert_eq!(
            solver.submit_feedback_str("12202").unwrap(),
            SolverState::AwaitingFeedback
        );
        assert_eq!(solver.current_guess().text(), "trace");
    }

    #[test]
    fn sessions_are_independent() {
        let mut first = Solver::new(toy_set(), RankingConfig::default()).unwrap();
        let second = first.clone();

        first.submit_feedback_str("00000").unwrap();

        assert_eq!(first.state(), SolverState::Exhausted);
        assert_eq!(second.state(), SolverState::AwaitingFeedback);
        assert_eq!(second.candidate_count(), 3);
    }
}
