//! Moves, round results, and the move log.
//!
//! The log is a tagged sequence so a reader can tell a placement from the
//! terminal result without guessing at the record shape.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Board index (0-8).
    pub cell: usize,
    /// The mark placed.
    pub player: Mark,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.cell) {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> cell {}", self.player, self.cell),
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    /// A mark completed a triple.
    Winner(Mark),
    /// The board filled with no triple.
    Draw,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Winner(mark) => Some(*mark),
            GameResult::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(mark) => write!(f, "{} wins!", mark),
            GameResult::Draw => write!(f, "Draw!"),
        }
    }
}

/// One entry in a round's move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    /// A placement.
    Move(Move),
    /// Terminal marker, always last.
    Result {
        /// The round's outcome.
        outcome: GameResult,
    },
}

impl LogEntry {
    /// Returns the move, if this entry is one.
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            LogEntry::Move(mv) => Some(mv),
            LogEntry::Result { .. } => None,
        }
    }

    /// Returns the outcome, if this entry is the terminal marker.
    pub fn as_result(&self) -> Option<GameResult> {
        match self {
            LogEntry::Move(_) => None,
            LogEntry::Result { outcome } => Some(*outcome),
        }
    }
}

/// Error returned by engine operations.
///
/// All variants are recoverable; a failed call leaves the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// No round has been started yet.
    #[display("No round in progress; start one first")]
    RoundNotStarted,

    /// The round already has a result.
    #[display("Round is already over")]
    RoundAlreadyEnded,

    /// Index past the last cell.
    #[display("Cell {} is out of range (0-8)", _0)]
    CellOutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    InvalidMove(usize),

    /// The mark is not the one whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),

    /// The board has no empty cells.
    #[display("No moves available")]
    NoMovesAvailable,

    /// The computer was asked to move when it does not own the turn.
    #[display("It's not the computer's turn")]
    NotComputerTurn,
}

impl std::error::Error for EngineError {}
