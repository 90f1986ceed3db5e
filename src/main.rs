//! Unscramble - CLI
//!
//! Word unscrambling game with TUI and CLI modes, plus a session simulator.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use unscramble::{
    commands::{SimulationConfig, check_pool, run_simple, run_simulation},
    core::Word,
    game::{GameConfig, GameEngine, MAX_NO_OF_WORDS, SCORE_INCREASE},
    logging,
    output::{print_check_report, print_play_summary, print_simulation_result},
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble shuffled words against the clock of a fixed session",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Words per session
    #[arg(short = 'm', long, global = true, default_value_t = MAX_NO_OF_WORDS)]
    max_words: usize,

    /// Points per correct guess
    #[arg(long, global = true, default_value_t = SCORE_INCREASE)]
    score_increase: u32,

    /// Seed for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// The TUI logs warnings only unless --log-file is given.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Play many sessions automatically and report score statistics
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Probability that the simulated player solves a word (0.0-1.0)
        #[arg(short, long, default_value = "0.7")]
        accuracy: f64,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },

    /// Check whether the word list can support a session
    Check,
}

/// Load the word pool based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use unscramble::wordlists::loader::load_from_file;

    match wordlist {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}")),
    }
}

fn build_engine(words: Vec<Word>, config: GameConfig, seed: Option<u64>) -> Result<GameEngine> {
    let engine = match seed {
        Some(seed) => GameEngine::seeded(words, config, seed),
        None => GameEngine::from_entropy(words, config),
    };
    engine.context("Word list cannot support a session")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let tui = matches!(command, Commands::Play);
    logging::init(cli.verbose, tui, cli.log_file.as_deref())
        .context("Failed to open log file")?;

    let words = load_words(&cli.wordlist)?;
    let config = GameConfig::new(cli.max_words, cli.score_increase);
    info!(words = words.len(), max_words = config.max_words, "word list loaded");

    match command {
        Commands::Play => run_play_command(words, config, cli.seed),
        Commands::Simple => {
            let mut engine = build_engine(words, config, cli.seed)?;
            run_simple(&mut engine)?;
            Ok(())
        }
        Commands::Simulate {
            count,
            accuracy,
            quiet,
        } => run_simulate_command(&words, config, cli.seed, count, accuracy, quiet),
        Commands::Check => run_check_command(&words, config),
    }
}

fn run_play_command(words: Vec<Word>, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let engine = build_engine(words, config, seed)?;
    let stats = run_tui(App::new(engine))?;
    print_play_summary(&stats, config.max_score());
    Ok(())
}

fn run_simulate_command(
    words: &[Word],
    config: GameConfig,
    seed: Option<u64>,
    count: usize,
    accuracy: f64,
    quiet: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {count} sessions (accuracy {accuracy:.2}, seed {seed})...");

    let sim_config = SimulationConfig {
        sessions: count,
        accuracy,
        seed,
        game: config,
        show_progress: !quiet,
    };
    let result = run_simulation(words, &sim_config)?;
    print_simulation_result(&result, config.max_score());
    Ok(())
}

fn run_check_command(words: &[Word], config: GameConfig) -> Result<()> {
    let report = check_pool(words, config);
    print_check_report(&report);

    if !report.is_playable() {
        bail!("Word list is not playable");
    }
    Ok(())
}
