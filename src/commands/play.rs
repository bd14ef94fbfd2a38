//! Interactive solving mode
//!
//! Suggests a guess, reads the game's feedback and repeats. Input and
//! output are plain streams so the loop runs the same on a terminal and
//! under test.

use crate::core::{FeedbackCode, Word};
use crate::error::SolverError;
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, SolverState};
use std::io::{self, BufRead, Write};

/// Candidates are listed once this few remain
const SHOW_CANDIDATES_BELOW: usize = 10;

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySummary {
    /// `AwaitingFeedback` when the player quit mid-game
    pub outcome: SolverState,
    pub guesses: usize,
    pub answer: Option<Word>,
}

/// Run the interactive loop until the word is found, the player quits or
/// input runs out
///
/// Each line of `input` is a feedback code (`0` absent, `1` present, `2`
/// correct, one digit per letter) or a command:
/// - `guess WORD [CODE]` plays `WORD` instead of the suggestion; the code
///   can follow on the same line or the next one
/// - `list` shows every remaining word with its score
/// - `undo`, `new`, `quit`
///
/// Bad feedback or words are reported and asked for again.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Examples
/// ```
/// use lingo_solver::commands::run_play;
/// use lingo_solver::core::Word;
/// use lingo_solver::solver::{RankingConfig, Solver, SolverState};
///
/// let words = ["crane", "trace", "react"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let solver = Solver::new(words, RankingConfig::default()).unwrap();
///
/// let mut output = Vec::new();
/// let summary = run_play(&solver, "12202\n22222\n".as_bytes(), &mut output).unwrap();
///
/// assert_eq!(summary.outcome, SolverState::Solved);
/// assert_eq!(summary.answer.unwrap().text(), "trace");
/// ```
pub fn run_play<R: BufRead, W: Write>(
    template: &Solver,
    input: R,
    output: &mut W,
) -> io::Result<PlaySummary> {
    writeln!(
        output,
        "Lingo solver: {} candidates of {} letters",
        template.candidate_count(),
        template.word_length()
    )?;
    writeln!(
        output,
        "Enter feedback per letter: 2 = correct spot, 1 = elsewhere, 0 = absent"
    )?;
    writeln!(output, "Commands: 'guess WORD [CODE]', 'list', 'undo', 'new', 'quit'")?;

    let mut solver = template.clone();
    // Word the player picked over the suggestion, waiting for its feedback
    let mut chosen: Option<Word> = None;
    let mut lines = input.lines();

    loop {
        if solver.state() == SolverState::AwaitingFeedback {
            print_turn(&solver, chosen.as_ref(), output)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(summary(&solver));
        };
        let line = line?.trim().to_lowercase();
        let words: Vec<&str> = line.split_whitespace().collect();
        let result = match words.as_slice() {
            [] => continue,
            ["quit" | "q" | "exit"] => return Ok(summary(&solver)),
            ["undo" | "u"] => {
                chosen = None;
                if solver.undo() {
                    writeln!(output, "Undone, back to round {}", solver.rounds().len() + 1)?;
                } else {
                    writeln!(output, "Nothing to undo")?;
                }
                continue;
            }
            ["new" | "n"] => {
                chosen = None;
                solver = template.clone();
                writeln!(output, "New game")?;
                continue;
            }
            ["list" | "l"] => {
                print_ranked(&solver, output)?;
                continue;
            }
            ["guess" | "g", word] => match choose_word(&solver, word) {
                Ok(word) => {
                    chosen = Some(word);
                    continue;
                }
                Err(e) => Err(e),
            },
            ["guess" | "g", word, code] => choose_word(&solver, word).and_then(|word| {
                let feedback = FeedbackCode::parse(code, solver.word_length())?;
                solver.submit_feedback_for(&word, feedback)
            }),
            [code] => match &chosen {
                Some(word) => FeedbackCode::parse(code, solver.word_length())
                    .and_then(|feedback| solver.submit_feedback_for(word, feedback)),
                None => solver.submit_feedback_str(code),
            },
            _ => {
                writeln!(output, "Unknown command: {line}")?;
                continue;
            }
        };

        if result.is_ok() {
            chosen = None;
        }
        match result {
            Ok(SolverState::Solved) => {
                print_solved(&solver, output)?;
                return Ok(summary(&solver));
            }
            Ok(SolverState::Exhausted) => {
                writeln!(
                    output,
                    "No word fits that feedback. Type 'undo' to correct it or 'new' to restart"
                )?;
            }
            Ok(SolverState::AwaitingFeedback) => {}
            Err(e) => writeln!(output, "Error: {e}")?,
        }
    }
}

/// Validate a word typed by the player against the session
fn choose_word(solver: &Solver, text: &str) -> Result<Word, SolverError> {
    let word = Word::new(text)?;
    if word.len() != solver.word_length() {
        return Err(SolverError::LengthMismatch {
            guess: word.text().to_string(),
            other: solver.current_guess().text().to_string(),
        });
    }
    Ok(word)
}

fn print_turn<W: Write>(solver: &Solver, chosen: Option<&Word>, output: &mut W) -> io::Result<()> {
    let guess = solver.current_guess();
    writeln!(output)?;
    writeln!(
        output,
        "Round {}: {} candidates ({:.2} bits)",
        solver.rounds().len() + 1,
        solver.candidate_count(),
        solver.bits_remaining()
    )?;

    if let Some(word) = chosen {
        writeln!(output, "Playing: {}  (enter its feedback)", word.text().to_uppercase())?;
    }

    if solver.is_determined() {
        writeln!(output, "Answer: {}", guess.text().to_uppercase())?;
        return Ok(());
    }

    let refs: Vec<&Word> = solver.candidates().iter().collect();
    let metrics = calculate_metrics(guess, &refs);
    writeln!(
        output,
        "Suggested guess: {}  ({:.3} bits, ~{:.1} left, worst case {})",
        guess.text().to_uppercase(),
        metrics.entropy,
        metrics.expected_remaining,
        metrics.max_partition
    )?;

    if let Some(coverage) = solver.last_coverage()
        && !coverage.is_exhaustive()
    {
        writeln!(
            output,
            "  (estimate: {}/{} guesses scored against {}/{} candidates)",
            coverage.guesses_evaluated,
            coverage.guesses_total,
            coverage.candidates_sampled,
            coverage.candidates_total
        )?;
    }

    if solver.candidate_count() <= SHOW_CANDIDATES_BELOW {
        let listed: Vec<String> = solver
            .candidates()
            .iter()
            .map(|word| word.text().to_uppercase())
            .collect();
        writeln!(output, "  Remaining: {}", listed.join(", "))?;
    }

    Ok(())
}

fn print_ranked<W: Write>(solver: &Solver, output: &mut W) -> io::Result<()> {
    let ranked = solver.ranked_candidates();
    if ranked.is_empty() {
        return writeln!(output, "No candidates left");
    }

    writeln!(output, "Remaining words, best first:")?;
    for (i, (word, score)) in ranked.iter().enumerate() {
        writeln!(output, "  {:>4}. {}  {score:.3} bits", i + 1, word.text().to_uppercase())?;
    }
    let unscored = solver.candidate_count().saturating_sub(ranked.len());
    if unscored > 0 {
        writeln!(output, "  ({unscored} more not scored in this estimate)")?;
    }
    Ok(())
}

fn print_solved<W: Write>(solver: &Solver, output: &mut W) -> io::Result<()> {
    let rounds = solver.rounds();
    writeln!(
        output,
        "\nSolved: {} in {} {}",
        solver.current_guess().text().to_uppercase(),
        rounds.len(),
        if rounds.len() == 1 { "guess" } else { "guesses" }
    )?;
    for (i, round) in rounds.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} {}",
            i + 1,
            round.guess.text().to_uppercase(),
            round.feedback.to_emoji()
        )?;
    }
    Ok(())
}

fn summary(solver: &Solver) -> PlaySummary {
    PlaySummary {
        outcome: solver.state(),
        guesses: solver.rounds().len(),
        answer: (solver.state() == SolverState::Solved).then(|| solver.current_guess().clone()),
    }
}
