//! Text rendering of engine state.

use crate::games::tictactoe::{GameEngine, Mode, RoundPhase};

/// Renders the score line, the board, and the status or prompt line.
pub fn render(engine: &GameEngine) -> String {
    let mut out = format!(
        "[{}]  {}\n\n{}\n\n",
        mode_label(engine.mode()),
        engine.score(),
        engine.board()
    );
    match engine.phase() {
        RoundPhase::NotStarted => out.push_str("Type 'new' to start a round."),
        RoundPhase::InProgress if engine.is_computer_turn() => {
            out.push_str("Computer is thinking...")
        }
        RoundPhase::InProgress => out.push_str(&format!("{} to move (1-9):", engine.turn())),
        RoundPhase::Ended(_) => {
            if let Some(message) = engine.status_message() {
                out.push_str(&message);
            }
            out.push_str(" Type 'new' to play again.");
        }
    }
    out
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::VsHuman => "Two players",
        Mode::VsComputer => "You (X) vs computer (O)",
    }
}

/// Command summary.
pub fn help_text() -> &'static str {
    "Commands:\n  \
     1-9 or a label (center, top-left, ...)  place your mark\n  \
     new [human|computer]                    start a new round\n  \
     reset                                   zero the score\n  \
     log                                     show this round's move log\n  \
     help                                    show this help\n  \
     quit                                    leave"
}
