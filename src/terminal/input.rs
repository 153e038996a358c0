//! Parsing of typed commands.

use crate::games::tictactoe::{Mode, Position};
use tracing::instrument;

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark.
    Place(Position),
    /// Start a new round, optionally switching mode.
    New(Option<Mode>),
    /// Zero the score.
    Reset,
    /// Print the current round's move log.
    Log,
    /// Show available commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Parses one input line. Returns `None` for anything unrecognized.
#[instrument]
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "new" | "n" => {
            if rest.is_empty() {
                Some(Command::New(None))
            } else {
                rest.parse().ok().map(|mode| Command::New(Some(mode)))
            }
        }
        "reset" => Some(Command::Reset),
        "log" => Some(Command::Log),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => Position::parse(line).map(Command::Place),
    }
}
