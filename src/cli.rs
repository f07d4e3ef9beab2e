//! Command-line interface for strictly_mastermind.

use clap::{Parser, Subcommand};

/// Strictly Mastermind - crack the secret code
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Mastermind code-breaking game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds on the console
    Play {
        /// Path to the game config file (defaults apply if missing)
        #[arg(short, long, default_value = "mastermind.toml")]
        config: std::path::PathBuf,

        /// Length of the secret code
        #[arg(long)]
        code_size: Option<usize>,

        /// Number of guesses per round
        #[arg(long)]
        max_tries: Option<usize>,

        /// Seed for reproducible secret codes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a single guess against a known solution
    Score {
        /// Solution as whitespace-separated integers
        #[arg(long)]
        solution: String,

        /// Guess as whitespace-separated integers
        #[arg(long)]
        guess: String,
    },
}
