//! Empty origin invariant: every history starts from the empty board.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: `history[0]` is the empty board with no placement.
pub struct EmptyOriginInvariant;

impl Invariant<GameSession> for EmptyOriginInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().first().is_some_and(|start| {
            start.board() == &Board::new() && start.position().is_none() && start.player().is_none()
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveRecord;
    use crate::{Player, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(EmptyOriginInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_non_empty_origin_violates() {
        let mut session = GameSession::new();
        session.history[0] = MoveRecord::placed(&Board::new(), Position::Center, Player::X);
        assert!(!EmptyOriginInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!EmptyOriginInvariant::holds(&session));
    }
}
