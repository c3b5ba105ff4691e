//! Parity turn invariant: X moves on even steps, O on odd steps.

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: the player to move is determined by the parity of the step.
pub struct ParityTurnInvariant;

impl Invariant<GameSession> for ParityTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        session.next_player() == Player::for_step(session.step())
    }

    fn description() -> &'static str {
        "Player to move matches the parity of the displayed step"
    }
}
