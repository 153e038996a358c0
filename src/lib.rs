//! tictactoe_tally - tic-tac-toe rules with a session score
//!
//! The engine runs rounds for two humans or a human against a computer that
//! picks open cells at random, keeps a tagged move log per round, and carries
//! a win tally across rounds until it is reset.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns board, turn, round phase, move log, score
//! - **Rules**: pure win and draw checks over a [`Board`]
//! - **Round log**: JSON-lines export and replay of finished rounds
//! - **Terminal**: a line-based presentation layer driving the engine
//!
//! # Example
//!
//! ```
//! use tictactoe_tally::{GameEngine, GameResult, Mark, Mode};
//!
//! let mut engine = GameEngine::with_seed(7);
//! engine.start(Mode::VsHuman);
//! for (cell, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
//!     assert_eq!(engine.place_mark(cell, mark), Ok(None));
//! }
//! assert_eq!(engine.place_mark(2, Mark::X), Ok(Some(GameResult::Winner(Mark::X))));
//! assert_eq!(engine.score().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod round_log;
pub mod terminal;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Round log
pub use round_log::{
    ReplayReport, RoundLogError, RoundLogWriter, RoundRecord, read_rounds, replay_file,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, EngineError, GameEngine, GameResult, LogEntry, Mark, Mode, Move, Position,
    RoundPhase, Score,
};

// Crate-level exports - Rules and opponent
pub use games::tictactoe::invariants::{EngineInvariants, Invariant, InvariantSet};
pub use games::tictactoe::opponent::random_open_cell;
pub use games::tictactoe::rules::{TRIPLES, check_win, is_full, winner};
