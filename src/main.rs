//! Strictly Mastermind - console game
//!
//! Plays mastermind rounds on stdin/stdout, or scores a single guess.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::process::ExitCode;
use strictly_mastermind::{GameError, MastermindGame, PatternGenerator};
use strictly_mastermind_cli::{ConsoleUi, MastermindConfig, parse_code, score_codes};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            code_size,
            max_tries,
            seed,
        } => run_play(&config, code_size, max_tries, seed),
        Command::Score { solution, guess } => run_score(&solution, &guess),
    }
}

/// Play rounds until the player quits
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: &Path,
    code_size: Option<usize>,
    max_tries: Option<usize>,
    seed: Option<u64>,
) -> Result<ExitCode> {
    let config = MastermindConfig::load_or_default(config_path)
        .context("Failed to load game configuration")?
        .with_overrides(code_size, max_tries, seed);
    config.validate()?;

    let generator = match config.seed() {
        Some(seed) => PatternGenerator::with_seed(config.code_set().clone(), *seed)?,
        None => PatternGenerator::new(config.code_set().clone())?,
    };

    info!(
        code_size = config.code_size(),
        max_tries = config.max_tries(),
        "Starting console game"
    );

    let mut ui = ConsoleUi::stdio(config.start_params());
    let mut game: MastermindGame<'_, u32, _> = MastermindGame::new(&mut ui, generator);

    match game.run() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(GameError::Rules(err)) => {
            warn!(kind = %err.kind(), "Game stopped on rule violation");
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(GameError::Ui(err)) => Err(err).context("Console I/O failed"),
    }
}

/// Score one guess and print the pegs
#[instrument]
fn run_score(solution: &str, guess: &str) -> Result<ExitCode> {
    match score_codes(&parse_code(solution), &parse_code(guess)) {
        Ok(result) => {
            println!("{}", result);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
