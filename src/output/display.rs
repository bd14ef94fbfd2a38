//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, RankReport, SolveResult};
use crate::solver::{RankingCoverage, SolverState};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {} ({:.2} bits before)",
                step.candidates_before, step.candidates_after, step.bits_before
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    let guesses = result.guesses.len();
    match result.outcome {
        SolverState::Solved => println!(
            "{}",
            format!("✅ Solved in {guesses} guesses!").green().bold()
        ),
        SolverState::Exhausted => println!(
            "{}",
            format!("❌ No candidate left after {guesses} guesses (is the word in the list?)")
                .red()
                .bold()
        ),
        SolverState::AwaitingFeedback => println!(
            "{}",
            format!("❌ Not solved within {guesses} guesses").red().bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates in {} outcomes",
        result.metrics.max_partition, result.metrics.outcomes
    );
    if !result.is_candidate {
        println!("   {}", "Not itself a possible answer".yellow());
    }
}

/// Print the top of a ranking pass
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOP GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, (word, entropy)) in report.entries.iter().enumerate() {
        let bar = entropy_bar(*entropy, report.coverage.candidates_total, 30);
        println!(
            "  {:>3}. {}  [{}] {entropy:.3} bits",
            i + 1,
            word.text().to_uppercase().bright_white().bold(),
            bar.green()
        );
    }

    print_coverage(&report.coverage);
}

fn print_coverage(coverage: &RankingCoverage) {
    if coverage.is_exhaustive() {
        println!(
            "\n  Scored {} guesses against {} candidates",
            coverage.guesses_total, coverage.candidates_total
        );
    } else {
        println!(
            "\n  {} scored {}/{} guesses against {}/{} candidates",
            "Estimate:".yellow().bold(),
            coverage.guesses_evaluated,
            coverage.guesses_total,
            coverage.candidates_sampled,
            coverage.candidates_total
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {}",
            format!("{}", result.exhausted).red()
        );
    }
    if result.unfinished > 0 {
        println!(
            "   Over the limit:   {}",
            format!("{}", result.unfinished).yellow()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar_width = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guesses:>2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!(
                "   {} ({guesses} guesses)",
                word.text().to_uppercase().yellow()
            );
        }
    }
}
