//! Application state: translates commands into engine calls.

use super::input::{Command, parse_command};
use super::ui;
use crate::config::AppConfig;
use crate::games::tictactoe::{GameEngine, GameResult, Mode, Position};
use crate::round_log::{RoundLogError, RoundLogWriter, RoundRecord};
use anyhow::Result;
use tracing::{debug, instrument, warn};

/// What the caller should do after a command.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    /// Text to show, in order.
    pub lines: Vec<String>,
    /// The computer owns the next turn and should move after the delay.
    pub computer_pending: bool,
    /// The player asked to leave.
    pub quit: bool,
}

impl Reply {
    fn text(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    config: AppConfig,
    round: u32,
    writer: Option<RoundLogWriter>,
}

impl App {
    /// Creates the app and starts the first round in the configured mode.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Result<Self> {
        let engine = match config.seed() {
            Some(seed) => GameEngine::with_seed(*seed),
            None => GameEngine::new(),
        };
        let writer = config.log_file().as_ref().map(RoundLogWriter::open).transpose()?;

        let mut app = Self {
            engine,
            config,
            round: 0,
            writer,
        };
        app.start_round(*app.config.mode());
        Ok(app)
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Text shown when the game opens.
    pub fn intro(&self) -> Reply {
        Reply {
            lines: vec![ui::help_text().to_string(), String::new(), ui::render(&self.engine)],
            ..Reply::default()
        }
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line) {
            Some(command) => self.handle(command),
            None => Reply::text(format!(
                "Unrecognized input '{}'. Type 'help' for commands.",
                line.trim()
            )),
        }
    }

    /// Handles a parsed command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Place(pos) => self.place(pos),
            Command::New(mode) => {
                self.start_round(mode.unwrap_or(self.engine.mode()));
                Reply::text(ui::render(&self.engine))
            }
            Command::Reset => {
                self.engine.reset_score();
                Reply::text(ui::render(&self.engine))
            }
            Command::Log => match serde_json::to_string_pretty(self.engine.move_log()) {
                Ok(json) => Reply::text(json),
                Err(e) => Reply::text(format!("Could not format log: {}", e)),
            },
            Command::Help => Reply::text(ui::help_text()),
            Command::Quit => Reply {
                lines: vec![format!("Final score  {}", self.engine.score())],
                quit: true,
                ..Reply::default()
            },
        }
    }

    /// Lets the computer take its pending turn.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Reply {
        match self.engine.play_computer_turn() {
            Ok((cell, outcome)) => {
                let mut reply = self.after_move(outcome);
                if let Some(pos) = Position::from_index(cell) {
                    reply.lines.insert(0, format!("Computer plays {}", pos));
                }
                reply
            }
            Err(e) => {
                warn!(error = %e, "Computer could not move");
                Reply::text(e.to_string())
            }
        }
    }

    fn place(&mut self, pos: Position) -> Reply {
        if self.engine.is_computer_turn() {
            return Reply::text("Wait for the computer's move.");
        }
        match self.engine.place_mark(pos.to_index(), self.engine.turn()) {
            Ok(outcome) => self.after_move(outcome),
            Err(e) => Reply::text(e.to_string()),
        }
    }

    fn after_move(&mut self, outcome: Option<GameResult>) -> Reply {
        let mut lines = vec![ui::render(&self.engine)];
        if outcome.is_some()
            && let Err(e) = self.record_round()
        {
            lines.push(format!("Round log not saved: {}", e.message));
        }
        Reply {
            lines,
            computer_pending: self.engine.is_computer_turn(),
            quit: false,
        }
    }

    fn start_round(&mut self, mode: Mode) {
        self.round += 1;
        self.engine.start(mode);
    }

    fn record_round(&mut self) -> Result<(), RoundLogError> {
        let record = RoundRecord::new(
            self.round,
            self.engine.mode(),
            self.engine.move_log().to_vec(),
        );
        debug!(?record, "Round finished");
        if let Some(writer) = self.writer.as_mut() {
            writer.write(&record).inspect_err(|e| {
                warn!(error = %e, "Failed to write round log");
            })?;
        }
        Ok(())
    }
}
