//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine decides when to
//! ask them; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{TRIPLES, check_win, winner};
