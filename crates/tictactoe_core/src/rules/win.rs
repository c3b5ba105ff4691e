//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
///
/// Rows top-to-bottom, columns left-to-right, then the TL-BR diagonal and
/// the TR-BL diagonal. The first completed line wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning mark and the three cells that form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Mark occupying all three cells.
    pub player: Player,
    /// The three cells, in line order.
    pub positions: [Position; 3],
}

impl WinningLine {
    /// Board indices of the winning cells.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Evaluates the board for a winner.
///
/// Returns the first line in [`LINES`] whose three cells are occupied by the
/// same player, or `None` if no line is complete.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|positions| {
        let [a, b, c] = positions;
        let player = board.get(a).player()?;
        (board.get(b).player() == Some(player) && board.get(c).player() == Some(player))
            .then_some(WinningLine { player, positions })
    })
}
