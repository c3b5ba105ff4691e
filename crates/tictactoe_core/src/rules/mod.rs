//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from session state so the controller and the invariants can
//! both consult them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::GameStatus;
pub use win::{LINES, WinningLine, evaluate};
