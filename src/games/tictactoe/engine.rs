//! Round and session state for tic-tac-toe.
//!
//! [`GameEngine`] owns everything a presentation layer needs to show: the
//! board, whose turn it is, the current round's move log, and the score that
//! survives from one round to the next.

use super::action::{EngineError, GameResult, LogEntry, Move};
use super::invariants::assert_invariants;
use super::opponent::{OpponentRng, opponent_rng, random_open_cell};
use super::rules;
use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(serialize = "human", serialize = "vs_human", to_string = "vs_human")]
    VsHuman,
    /// A human plays X against the computer's O.
    #[strum(serialize = "computer", serialize = "vs_computer", to_string = "vs_computer")]
    VsComputer,
}

impl Mode {
    /// The mark the computer plays in this mode.
    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            Mode::VsHuman => None,
            Mode::VsComputer => Some(Mark::O),
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// The round has a result; only `start` leaves this phase.
    Ended(GameResult),
}

/// Wins per mark across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
}

impl Score {
    /// Wins recorded for X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Wins recorded for O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Adds one win for `mark`.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x_wins, self.o_wins)
    }
}

/// Tic-tac-toe engine for one session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    mode: Mode,
    phase: RoundPhase,
    log: Vec<LogEntry>,
    score: Score,
    rng: OpponentRng,
}

impl GameEngine {
    /// Creates an engine whose computer opponent is seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(opponent_rng(None))
    }

    /// Creates an engine whose computer opponent is deterministic.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(opponent_rng(Some(seed)))
    }

    fn with_rng(rng: OpponentRng) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            mode: Mode::default(),
            phase: RoundPhase::NotStarted,
            log: Vec::new(),
            score: Score::default(),
            rng,
        }
    }

    /// Starts a fresh round, discarding the previous board and log.
    ///
    /// X always moves first; in [`Mode::VsComputer`] the computer owns O and
    /// waits for its turn.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        if self.phase == RoundPhase::InProgress {
            debug!(moves = self.log.len(), "Abandoning unfinished round");
        }
        self.board = Board::new();
        self.turn = Mark::X;
        self.mode = mode;
        self.phase = RoundPhase::InProgress;
        self.log.clear();
        info!(%mode, "Round started");
    }

    /// Places `mark` on `cell`.
    ///
    /// Returns the round's result if this move ended it. A failed call
    /// changes nothing.
    #[instrument(skip(self))]
    pub fn place_mark(
        &mut self,
        cell: usize,
        mark: Mark,
    ) -> Result<Option<GameResult>, EngineError> {
        self.ensure_in_progress()?;
        if cell >= Board::SIZE {
            return Err(EngineError::CellOutOfRange(cell));
        }
        if !self.board.is_empty(cell) {
            return Err(EngineError::InvalidMove(cell));
        }
        if mark != self.turn {
            return Err(EngineError::WrongTurn(mark));
        }

        self.board.place(cell, mark);
        self.log.push(LogEntry::Move(Move::new(cell, mark)));
        debug!(cell, %mark, "Mark placed");

        let outcome = if self.check_win(mark) {
            Some(GameResult::Winner(mark))
        } else if self.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => self.end_round(outcome),
            None => self.turn = mark.opponent(),
        }

        if cfg!(debug_assertions) {
            assert_invariants(self);
        }

        Ok(outcome)
    }

    /// Returns true if `mark` fills any winning triple.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.board, mark)
    }

    /// Returns true if no empty cell remains.
    ///
    /// A full board that also holds a triple is a win; check wins first.
    pub fn is_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    fn end_round(&mut self, outcome: GameResult) {
        self.log.push(LogEntry::Result { outcome });
        if let Some(winner) = outcome.winner() {
            self.score.record_win(winner);
        }
        self.phase = RoundPhase::Ended(outcome);
        info!(%outcome, score = %self.score, "Round ended");
    }

    /// Picks an empty cell uniformly at random.
    #[instrument(skip(self))]
    pub fn computer_choose_move(&mut self) -> Result<usize, EngineError> {
        random_open_cell(&self.board, &mut self.rng).ok_or(EngineError::NoMovesAvailable)
    }

    /// Returns true if the computer owns the current turn of a live round.
    pub fn is_computer_turn(&self) -> bool {
        self.phase == RoundPhase::InProgress && self.mode.computer_mark() == Some(self.turn)
    }

    /// Lets the computer take its turn.
    ///
    /// Returns the chosen cell and the round's result if the move ended it.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Result<(usize, Option<GameResult>), EngineError> {
        self.ensure_in_progress()?;
        if !self.is_computer_turn() {
            return Err(EngineError::NotComputerTurn);
        }
        let cell = self.computer_choose_move()?;
        let outcome = self.place_mark(cell, self.turn)?;
        Ok((cell, outcome))
    }

    /// Zeroes both win counters. The current round is untouched.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score = Score::default();
        info!("Score reset");
    }

    /// Replays `moves` as a fresh two-human round.
    ///
    /// Stops at the first illegal move. Moves after a result are illegal.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, EngineError> {
        let mut engine = Self::with_seed(0);
        engine.start(Mode::VsHuman);
        for mv in moves {
            engine.place_mark(mv.cell, mv.player)?;
        }
        Ok(engine)
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.phase {
            RoundPhase::NotStarted => Err(EngineError::RoundNotStarted),
            RoundPhase::Ended(_) => Err(EngineError::RoundAlreadyEnded),
            RoundPhase::InProgress => Ok(()),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next (the last mover once a round ends).
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the mode of the current round.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the current round's move log.
    pub fn move_log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Returns the round's result once it has ended.
    pub fn outcome(&self) -> Option<GameResult> {
        match self.phase {
            RoundPhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Indices of the empty cells.
    pub fn open_cells(&self) -> Vec<usize> {
        self.board.empty_cells()
    }

    /// Announcement text for a finished round.
    pub fn status_message(&self) -> Option<String> {
        self.outcome().map(|outcome| outcome.to_string())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
