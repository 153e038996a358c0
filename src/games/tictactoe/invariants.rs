//! Invariants that hold for every engine state reachable through legal play.
//!
//! The engine asserts them after each placement in debug builds.

use super::{Cell, GameEngine, LogEntry, Mark, RoundPhase};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every violated invariant.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(I1::description());
        }
        if !I2::holds(state) {
            violations.push(I2::description());
        }
        if !I3::holds(state) {
            violations.push(I3::description());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X and O counts never differ by more than one.
pub struct BoardConsistent;

impl Invariant<GameEngine> for BoardConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let x_count = engine.board().count(Mark::X);
        let o_count = engine.board().count(Mark::O);
        x_count.abs_diff(o_count) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

/// Every logged move matches an occupied cell and vice versa.
pub struct HistoryConsistent;

impl Invariant<GameEngine> for HistoryConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let moves: Vec<_> = engine
            .move_log()
            .iter()
            .filter_map(LogEntry::as_move)
            .collect();

        moves.len() == engine.board().filled()
            && moves
                .iter()
                .all(|mv| engine.board().get(mv.cell) == Some(Cell::Occupied(mv.player)))
    }

    fn description() -> &'static str {
        "Move log matches occupied cells"
    }
}

/// Logged moves go X, O, X, ... and the turn follows.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(engine: &GameEngine) -> bool {
        let mut expected = Mark::X;
        let mut last = None;
        for mv in engine.move_log().iter().filter_map(LogEntry::as_move) {
            if mv.player != expected {
                return false;
            }
            last = Some(mv.player);
            expected = expected.opponent();
        }

        match engine.phase() {
            // The turn does not flip on the move that ends the round.
            RoundPhase::Ended(_) => last == Some(engine.turn()),
            _ => engine.turn() == expected,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// All engine invariants.
pub type EngineInvariants = (BoardConsistent, HistoryConsistent, AlternatingTurn);

/// Panics in debug builds if any invariant is violated.
pub fn assert_invariants(engine: &GameEngine) {
    if let Err(violations) = EngineInvariants::check_all(engine) {
        warn!(?violations, "Engine invariant violated");
        debug_assert!(false, "Engine invariants violated: {}", violations.join("; "));
    }
}
