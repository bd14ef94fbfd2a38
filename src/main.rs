//! Lingo Solver - CLI
//!
//! Interactive and batch front ends for the entropy-based Lingo solver.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use lingo_solver::{
    SolverError,
    commands::{
        BenchmarkConfig, SolveConfig, analyze_word, precompute_scores, rank_guesses,
        run_benchmark, run_play, solve_word,
    },
    core::Word,
    dictionary::{DirectoryProvider, ScoreProvider, load_word_list},
    output::{
        print_analysis_result, print_benchmark_result, print_rank_report, print_solve_result,
    },
    solver::{RankingConfig, Solver},
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lingo_solver",
    about = "Lingo / Wordle solver choosing guesses by expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Directory of precomputed score tables (`<length>_<anchor|all>.csv`)
    #[arg(long, global = true)]
    scores_dir: Option<PathBuf>,

    /// Word length to play
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Known first letter of the answer
    #[arg(short = 'a', long, global = true)]
    anchor: Option<char>,

    #[command(flatten)]
    ranking: RankingArgs,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct RankingArgs {
    /// Score only the first N guesses of each pool
    #[arg(long, global = true)]
    max_guesses_evaluated: Option<usize>,

    /// Estimate each guess from N sampled candidates
    #[arg(long, global = true)]
    max_candidates_sampled: Option<usize>,

    /// Seed for candidate sampling
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Stop a ranking pass after this many milliseconds
    #[arg(long, global = true)]
    time_budget_ms: Option<u64>,
}

impl RankingArgs {
    fn to_config(&self) -> RankingConfig {
        let mut config = RankingConfig::unbounded().with_seed(self.seed);
        if let Some(max) = self.max_guesses_evaluated {
            config = config.with_max_guesses(max);
        }
        if let Some(max) = self.max_candidates_sampled {
            config = config.with_max_candidates(max);
        }
        if let Some(ms) = self.time_budget_ms {
            config = config.with_time_budget(Duration::from_millis(ms));
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggest guesses and read feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per step
        #[arg(short, long)]
        details: bool,

        /// Give up after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,
    },

    /// Analyze how well a word splits the candidates
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Show the best opening guesses
    Rank {
        /// Number of guesses to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Solve every word in the list and report statistics
    Benchmark {
        /// Test only the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Give up on a word after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Write the opening score table for --length/--anchor to --scores-dir
    Precompute,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Play mode if no command given
    match &cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Solve {
            word,
            details,
            max_guesses,
        }) => run_solve_command(&cli, word, *details, *max_guesses),
        Some(Commands::Analyze { word }) => run_analyze_command(&cli, word),
        Some(Commands::Rank { top }) => run_rank_command(&cli, *top),
        Some(Commands::Benchmark {
            limit,
            max_guesses,
            quiet,
        }) => run_benchmark_command(&cli, *limit, *max_guesses, *quiet),
        Some(Commands::Precompute) => run_precompute_command(&cli),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Words of the requested length (and anchor) from `--words`
fn load_candidates(cli: &Cli) -> Result<Vec<Word>> {
    let Some(path) = &cli.words else {
        bail!("no word list given (use --words FILE)");
    };

    let words: Vec<Word> = load_word_list(path)
        .with_context(|| format!("loading word list {}", path.display()))?
        .into_iter()
        .filter(|word| word.len() == cli.length)
        .filter(|word| cli.anchor.is_none_or(|anchor| word.starts_with(anchor)))
        .collect();

    if words.is_empty() {
        bail!(
            "{} has no {}-letter words{}",
            path.display(),
            cli.length,
            cli.anchor
                .map_or_else(String::new, |a| format!(" starting with '{a}'"))
        );
    }
    info!(words = words.len(), "candidates loaded");
    Ok(words)
}

/// Start a session, preferring a precomputed table when one exists
fn start_session(cli: &Cli) -> Result<Solver> {
    let config = cli.ranking.to_config();

    if let Some(dir) = &cli.scores_dir {
        let provider = DirectoryProvider::new(dir);
        match provider.score_table(cli.length, cli.anchor) {
            Ok(table) => return Ok(Solver::with_scores(&table, config)?),
            Err(SolverError::MissingDictionary { .. }) if cli.words.is_some() => {
                warn!(
                    dir = %dir.display(),
                    "no precomputed table, ranking the word list instead"
                );
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading scores from {}", dir.display()));
            }
        }
    }

    let candidates = load_candidates(cli)?;
    Ok(Solver::new(candidates, config)?)
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let solver = start_session(cli)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = run_play(&solver, stdin.lock(), &mut stdout)?;
    info!(outcome = ?summary.outcome, guesses = summary.guesses, "play finished");
    Ok(())
}

fn run_solve_command(
    cli: &Cli,
    word: &str,
    details: bool,
    max_guesses: Option<usize>,
) -> Result<()> {
    let solver = start_session(cli)?;
    let mut config = SolveConfig::new(word.to_string());
    config.max_guesses = max_guesses;

    let result = solve_word(config, &solver).with_context(|| format!("solving {word}"))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(cli: &Cli, word: &str) -> Result<()> {
    let candidates = load_candidates(cli)?;
    let result =
        analyze_word(word, &candidates).with_context(|| format!("analyzing {word}"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_rank_command(cli: &Cli, top: usize) -> Result<()> {
    let candidates = load_candidates(cli)?;
    let report = rank_guesses(&candidates, &cli.ranking.to_config(), top)?;
    print_rank_report(&report);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    limit: Option<usize>,
    max_guesses: Option<usize>,
    quiet: bool,
) -> Result<()> {
    let solver = start_session(cli)?;
    let targets = solver.candidates().to_vec();
    let config = BenchmarkConfig {
        limit,
        max_guesses,
        show_progress: !quiet,
    };

    println!(
        "Benchmarking {} words...",
        limit.map_or(targets.len(), |n| n.min(targets.len()))
    );
    let result = run_benchmark(&solver, &targets, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_precompute_command(cli: &Cli) -> Result<()> {
    let Some(dir) = &cli.scores_dir else {
        bail!("precompute needs --scores-dir DIR");
    };
    let Some(path) = &cli.words else {
        bail!("precompute needs --words FILE");
    };

    let words = load_word_list(path)
        .with_context(|| format!("loading word list {}", path.display()))?;
    let provider = DirectoryProvider::new(dir);
    let written = precompute_scores(
        &words,
        cli.length,
        cli.anchor,
        &cli.ranking.to_config(),
        &provider,
    )
    .with_context(|| format!("precomputing {}-letter scores", cli.length))?;

    println!("Wrote {}", written.display());
    Ok(())
}
