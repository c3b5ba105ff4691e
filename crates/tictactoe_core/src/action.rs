//! History records and move errors.
//!
//! A move is recorded together with the board it produced, so any step of
//! the history can be shown again without replaying earlier moves.

use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// One entry in the game history.
///
/// The first record of every history is [`MoveRecord::start`]: an empty
/// board with no placement. Records are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct MoveRecord {
    /// Board after this move.
    board: Board,
    /// Cell that was filled, absent for the start record.
    position: Option<Position>,
    /// Mark that was placed, absent for the start record.
    player: Option<Player>,
}

impl MoveRecord {
    /// Record for the empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
            player: None,
        }
    }

    /// Records `player` placing a mark at `position` on top of `previous`.
    pub fn placed(previous: &Board, position: Position, player: Player) -> Self {
        Self {
            board: previous.with_mark(position, player),
            position: Some(position),
            player: Some(player),
        }
    }

    /// Coordinate label of the placement, `""` for the start record.
    pub fn point(&self) -> &'static str {
        self.position.map(Position::label).unwrap_or("")
    }
}

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is outside the board", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),

    /// Requested step is beyond the recorded history.
    #[display("Step {} is outside the history (length {})", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of records in the history.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_record_has_no_placement() {
        let start = MoveRecord::start();
        assert_eq!(start.board(), &Board::new());
        assert_eq!(start.point(), "");
        assert_eq!(*start.player(), None);
    }

    #[test]
    fn test_placed_record_copies_board() {
        let start = MoveRecord::start();
        let record = MoveRecord::placed(start.board(), Position::MiddleRight, Player::O);
        assert_eq!(record.point(), "col:3, row:2");
        assert_eq!(*record.player(), Some(Player::O));
        assert!(start.board().is_empty(Position::MiddleRight));
        assert!(!record.board().is_empty(Position::MiddleRight));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Square col:2, row:2 is already occupied"
        );
        assert_eq!(
            MoveError::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "Step 7 is outside the history (length 3)"
        );
    }
}
