//! tictactoe_tally - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tictactoe_tally::{AppConfig, Mode, replay_file, terminal};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            mode,
            seed,
            log_file,
            delay_ms,
        } => run_play(&cli.config, mode, seed, log_file, delay_ms).await,
        Command::Replay { log_file } => run_replay(&log_file),
    }
}

/// Logs go to stderr so they don't interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_tally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run an interactive session
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    mode: Option<Mode>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = AppConfig::load_or_default(config_path)?;

    // Flags override the file
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(seed) = seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(log_file) = log_file {
        config = config.with_log_file(Some(log_file));
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }

    info!(?config, "Starting play session");
    terminal::run(config).await
}

/// Replay every round in a log file
#[instrument(skip_all, fields(log_file = %log_file.display()))]
fn run_replay(log_file: &Path) -> Result<()> {
    let report = replay_file(log_file)?;
    for line in &report.lines {
        println!("{}", line);
    }
    println!(
        "{} rounds replayed. {}  Draws: {}",
        report.rounds, report.tally, report.draws
    );

    if report.failures > 0 {
        error!(failures = report.failures, "Some rounds failed to replay");
        anyhow::bail!("{} of {} rounds failed to replay", report.failures, report.rounds);
    }
    Ok(())
}
