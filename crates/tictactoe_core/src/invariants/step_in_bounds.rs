//! Step bounds invariant: the displayed step is a recorded one.

use super::Invariant;
use crate::GameSession;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step() < session.history().len()
    }

    fn description() -> &'static str {
        "Displayed step lies within the history"
    }
}
