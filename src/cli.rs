//! Command-line interface for tictactoe_tally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_tally::Mode;

/// Tic-tac-toe with a running score, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tally")]
#[command(about = "Terminal tic-tac-toe with a session score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it doesn't exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play {
        /// Mode for the first round: human or computer
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Seed for the computer opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Append each finished round to this JSON-lines file
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Milliseconds the computer waits before moving
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Replay a JSON-lines round log and check every result
    Replay {
        /// Log file written by `play --log-file`
        log_file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            mode: None,
            seed: None,
            log_file: None,
            delay_ms: None,
        }
    }
}
