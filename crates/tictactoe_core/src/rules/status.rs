//! Status line derived from a board and the player to move.

use super::{evaluate, is_full};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line reports for a displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line has been completed.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Empty cells remain and nobody has won.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Board full with no winner.
    #[display("Even")]
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` when `next` is due to move.
    #[instrument(skip(board))]
    pub fn of(board: &Board, next: Player) -> Self {
        if let Some(line) = evaluate(board) {
            GameStatus::Winner(line.player)
        } else if !is_full(board) {
            GameStatus::NextPlayer(next)
        } else {
            GameStatus::Draw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
        assert_eq!(GameStatus::Draw.to_string(), "Even");
    }

    #[test]
    fn test_status_of_empty_board() {
        assert_eq!(
            GameStatus::of(&Board::new(), Player::X),
            GameStatus::NextPlayer(Player::X)
        );
    }

    #[test]
    fn test_winner_reported_over_next_player() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(GameStatus::of(&board, Player::O), GameStatus::Winner(Player::X));
    }
}
