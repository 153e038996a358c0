//! Tic-tac-toe: rules, move log, and the session engine.

pub mod action;
pub mod engine;
pub mod invariants;
pub mod opponent;
pub mod position;
pub mod rules;
pub mod types;

pub use action::{EngineError, GameResult, LogEntry, Move};
pub use engine::{GameEngine, Mode, RoundPhase, Score};
pub use position::Position;
pub use types::{Board, Cell, Mark};
