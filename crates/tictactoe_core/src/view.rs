//! Render-ready snapshot of a session.
//!
//! The view carries everything a front end needs to draw the game and
//! nothing it could use to change it.

use crate::rules::GameStatus;
use crate::session::{GameSession, HistoryOrder};
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One line of the move list.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button text.
    text: String,
    /// Whether this is the displayed step.
    is_current: bool,
}

/// Everything needed to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameView {
    /// Displayed board.
    board: Board,
    /// Cells of the completed line, empty if nobody has won.
    winning_line: Vec<Position>,
    /// Move list in display order.
    moves: Vec<MoveEntry>,
    /// Status of the displayed board.
    status: GameStatus,
    /// Display order of `moves`.
    order: HistoryOrder,
}

impl GameView {
    /// Status line text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }
}

impl GameSession {
    /// Builds the render snapshot for the displayed step.
    #[instrument(skip(self), fields(step = self.step(), order = %self.order()))]
    pub fn view(&self) -> GameView {
        let mut moves: Vec<MoveEntry> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, record)| {
                let text = match record.player() {
                    Some(player) if step > 0 => {
                        format!("Go to move #{} by {} {}", step, player, record.point())
                    }
                    _ => "Go to game start".to_string(),
                };
                MoveEntry::new(step, text, step == self.step())
            })
            .collect();

        if self.order() == HistoryOrder::Descending {
            moves.reverse();
        }

        GameView {
            board: self.board().clone(),
            winning_line: self
                .winner()
                .map(|line| line.positions.to_vec())
                .unwrap_or_default(),
            moves,
            status: self.status(),
            order: self.order(),
        }
    }
}
