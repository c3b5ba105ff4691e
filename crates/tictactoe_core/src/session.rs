//! Game session: move history, current step and display order.
//!
//! A [`GameSession`] is an immutable snapshot. Every transition borrows the
//! current snapshot and returns a new one; published records and boards are
//! never touched again. Rejected transitions hand back an unchanged copy.

use crate::action::{MoveError, MoveRecord};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{GameStatus, WinningLine, evaluate};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chronological order in which the move list is displayed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum HistoryOrder {
    /// Oldest move first.
    #[default]
    #[display("asc")]
    Ascending,
    /// Newest move first.
    #[display("desc")]
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Complete state of one game, including its time-travel history.
///
/// Deserialized sessions are checked against [`SessionInvariants`] and
/// rejected if any invariant fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionFields")]
pub struct GameSession {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) step: usize,
    pub(crate) next: Player,
    pub(crate) order: HistoryOrder,
}

/// Unvalidated session fields as read by serde.
#[derive(Deserialize)]
struct SessionFields {
    history: Vec<MoveRecord>,
    step: usize,
    next: Player,
    order: HistoryOrder,
}

/// A session snapshot that violates the session invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid session: {}", _0)]
pub struct InvalidSession(#[error(not(source))] String);

impl TryFrom<SessionFields> for GameSession {
    type Error = InvalidSession;

    fn try_from(fields: SessionFields) -> Result<Self, Self::Error> {
        let session = Self {
            history: fields.history,
            step: fields.step,
            next: fields.next,
            order: fields.order,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvalidSession(descriptions)
        })?;
        Ok(session)
    }
}

impl GameSession {
    /// Creates the initial session: empty board, X to move, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::start()],
            step: 0,
            next: Player::X,
            order: HistoryOrder::Ascending,
        }
    }

    /// All recorded moves, starting with the empty board.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the displayed history record.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player due to move on the displayed board.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Display order of the move list.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// The displayed history record.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Winning line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        evaluate(self.board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.board(), self.next)
    }

    /// Places the current player's mark at `index`, refusing illegal moves.
    ///
    /// Records after the displayed step are dropped before the new record
    /// is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] if `index` is not in 0-8.
    /// - [`MoveError::GameOver`] if the displayed board already has a winner.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(step = self.step, player = %self.next))]
    pub fn try_apply_move(&self, index: usize) -> Result<Self, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        let board = self.board();

        if let Some(line) = evaluate(board) {
            return Err(MoveError::GameOver(line.player));
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mut history = self.history[..=self.step].to_vec();
        history.push(MoveRecord::placed(board, position, self.next));

        let next = Self {
            step: history.len() - 1,
            history,
            next: self.next.opponent(),
            order: self.order,
        };
        debug!(position = %position, new_step = next.step, "Move applied");
        next.debug_check();
        Ok(next)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Illegal moves are ignored: the returned session equals `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Self {
        self.try_apply_move(index).unwrap_or_else(|e| {
            debug!(error = %e, "Move ignored");
            self.clone()
        })
    }

    /// Displays the board as it was at `step`, keeping the full history.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] if `step` has not been recorded.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let next = Self {
            history: self.history.clone(),
            step,
            next: Player::for_step(step),
            order: self.order,
        };
        debug!(step, "Jumped to step");
        next.debug_check();
        Ok(next)
    }

    /// Displays the board as it was at `step`.
    ///
    /// Unknown steps are ignored: the returned session equals `self`.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        self.try_jump_to(step).unwrap_or_else(|e| {
            debug!(error = %e, "Jump ignored");
            self.clone()
        })
    }

    /// Flips the display order of the move list.
    #[instrument(skip(self), fields(order = %self.order))]
    pub fn toggle_order(&self) -> Self {
        Self {
            order: self.order.toggle(),
            ..self.clone()
        }
    }

    /// Returns the initial session, discarding all history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn reset(&self) -> Self {
        debug!("Session reset");
        Self::new()
    }

    fn debug_check(&self) {
        let result = SessionInvariants::check_all(self);
        debug_assert!(result.is_ok(), "Session invariant violated: {:?}", result);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.step(), 0);
        assert_eq!(session.next_player(), Player::X);
        assert_eq!(session.order(), HistoryOrder::Ascending);
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_moves_alternate() {
        let session = GameSession::new().apply_move(4);
        assert_eq!(session.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(session.next_player(), Player::O);
        assert_eq!(session.step(), 1);

        let session = session.apply_move(0);
        assert_eq!(session.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(session.next_player(), Player::X);
        assert_eq!(session.step(), 2);
    }

    #[test]
    fn test_transition_does_not_touch_source() {
        let before = GameSession::new();
        let after = before.apply_move(4);
        assert_eq!(before, GameSession::new());
        assert_ne!(before, after);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let session = GameSession::new().apply_move(4);
        assert_eq!(
            session.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.apply_move(4), session);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let session = GameSession::new();
        assert_eq!(session.try_apply_move(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(session.apply_move(9), session);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let session = GameSession::new().apply_move(0);
        assert_eq!(
            session.try_jump_to(2),
            Err(MoveError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(session.jump_to(2), session);
    }

    #[test]
    fn test_toggle_order_keeps_history() {
        let session = GameSession::new().apply_move(0).apply_move(1);
        let toggled = session.toggle_order();
        assert_eq!(toggled.order(), HistoryOrder::Descending);
        assert_eq!(toggled.history(), session.history());
        assert_eq!(toggled.step(), session.step());
        assert_eq!(toggled.toggle_order().order(), HistoryOrder::Ascending);
    }

    #[test]
    fn test_deserialize_accepts_played_session() {
        let session = GameSession::new().apply_move(4).apply_move(0).jump_to(1);
        let json = serde_json::to_value(&session).unwrap();
        let restored: GameSession = serde_json::from_value(json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut json = serde_json::to_value(GameSession::new()).unwrap();
        json["step"] = serde_json::json!(5);

        let err = serde_json::from_value::<GameSession>(json).unwrap_err();
        assert!(err.to_string().contains("Displayed step lies within the history"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_player_to_move() {
        let mut json = serde_json::to_value(GameSession::new().apply_move(4)).unwrap();
        json["next"] = serde_json::json!("X");

        let err = serde_json::from_value::<GameSession>(json).unwrap_err();
        assert!(err.to_string().contains("parity"));
    }

    #[test]
    fn test_order_labels() {
        assert_eq!(HistoryOrder::Ascending.to_string(), "asc");
        assert_eq!(HistoryOrder::Descending.to_string(), "desc");
    }
}
