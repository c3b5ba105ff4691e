//! Event dispatch for rendering front ends.

use crate::session::GameSession;
use crate::view::GameView;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// User interaction reported by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiEvent {
    /// A board cell (0-8) was selected.
    CellClicked(usize),
    /// A move-list entry was selected.
    HistoryClicked(usize),
    /// The order toggle was pressed.
    ToggleOrder,
    /// The reset button was pressed.
    Reset,
}

/// Owns the current session snapshot and replaces it on every event.
///
/// Each transition is computed from the snapshot held at the time the event
/// arrives.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    session: GameSession,
}

impl Controller {
    /// Creates a controller with a fresh session.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session snapshot.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Render snapshot of the current session.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Applies `event` and returns the resulting snapshot.
    #[instrument(skip(self), fields(step = self.session.step()))]
    pub fn handle(&mut self, event: UiEvent) -> &GameSession {
        let next = match event {
            UiEvent::CellClicked(index) => self.session.apply_move(index),
            UiEvent::HistoryClicked(step) => self.session.jump_to(step),
            UiEvent::ToggleOrder => self.session.toggle_order(),
            UiEvent::Reset => self.session.reset(),
        };
        debug!(new_step = next.step(), len = next.history().len(), "Event handled");
        self.session = next;
        &self.session
    }
}
