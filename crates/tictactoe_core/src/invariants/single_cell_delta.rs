//! Single cell delta invariant: each record adds exactly one mark.

use super::Invariant;
use crate::{GameSession, Position, Square};

/// Invariant: each record differs from its predecessor in exactly one cell.
///
/// That cell was empty before, and now holds the record's mark at the
/// record's position.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameSession> for SingleCellDeltaInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
                .collect();

            match (changed.as_slice(), after.position(), after.player()) {
                ([pos], Some(placed), Some(player)) => {
                    pos == placed
                        && before.board().is_empty(*pos)
                        && after.board().get(*pos) == Square::Occupied(*player)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history record fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveRecord;
    use crate::Player;

    #[test]
    fn test_played_session_holds() {
        let session = GameSession::new().apply_move(4).apply_move(0).apply_move(8);
        assert!(SingleCellDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_overwrite_violates() {
        let mut session = GameSession::new().apply_move(4);
        let overwrite = MoveRecord::placed(session.history[1].board(), Position::Center, Player::O);
        session.history.push(overwrite);
        assert!(!SingleCellDeltaInvariant::holds(&session));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let mut session = GameSession::new();
        session.history.push(MoveRecord::start());
        assert!(!SingleCellDeltaInvariant::holds(&session));
    }
}
