//! Line-based terminal front end.
//!
//! Reads commands from stdin, hands them to [`App`], and paces the
//! computer's replies with the configured delay.

mod app;
mod input;
mod ui;

pub use app::{App, Reply};
pub use input::{Command, parse_command};
pub use ui::{help_text, render};

use crate::config::AppConfig;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, instrument};

/// Runs an interactive session until `quit` or end of input.
#[instrument(skip(config))]
pub async fn run(config: AppConfig) -> Result<()> {
    let mut app = App::new(config)?;
    let delay = app.config().computer_delay();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!(mode = %app.engine().mode(), "Terminal session started");
    show(&mut stdout, &app.intro()).await?;

    while let Some(line) = lines.next_line().await? {
        let reply = app.handle_line(&line);
        show(&mut stdout, &reply).await?;
        if reply.quit {
            break;
        }

        // Input typed during the pause is read after the computer has moved.
        if reply.computer_pending {
            tokio::time::sleep(delay).await;
            show(&mut stdout, &app.computer_move()).await?;
        }
    }

    info!(score = %app.engine().score(), "Terminal session ended");
    Ok(())
}

async fn show(stdout: &mut tokio::io::Stdout, reply: &Reply) -> Result<()> {
    for line in &reply.lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
