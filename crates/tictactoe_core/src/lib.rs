//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: board, marks and positions
//! - **Rules**: win evaluation, draw detection and status text
//! - **Session**: immutable game snapshots and their transitions
//! - **View**: render-ready snapshot for front ends
//! - **Controller**: turns UI events into session transitions
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Controller, UiEvent};
//!
//! let mut controller = Controller::new();
//! controller.handle(UiEvent::CellClicked(4));
//! controller.handle(UiEvent::CellClicked(0));
//! assert_eq!(controller.view().status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod invariants;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{MoveError, MoveRecord};
pub use controller::{Controller, UiEvent};
pub use rules::{GameStatus, WinningLine, evaluate};
pub use session::{GameSession, HistoryOrder, InvalidSession};
pub use types::{Board, Player, Position, Square};
pub use view::{GameView, MoveEntry};
