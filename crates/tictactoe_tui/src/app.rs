//! Application state for the terminal front end.

use crate::input::{Command, Focus, command_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{Controller, GameView, Position, UiEvent};
use tracing::{debug, instrument};

/// Main application state.
///
/// Game state lives in the [`Controller`]; the app only tracks what the
/// terminal needs on top of it: the board cursor, the move-list selection
/// and which of the two has focus.
#[derive(Debug, Clone)]
pub struct App {
    controller: Controller,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            controller: Controller::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The game controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Render snapshot of the current game.
    pub fn view(&self) -> GameView {
        self.controller.view()
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(command) = command_for(self.focus, key) {
            self.apply(command);
        }
    }

    /// Applies a command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.dispatch(UiEvent::CellClicked(self.cursor.to_index())),
            Command::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.dispatch(UiEvent::CellClicked(index));
            }
            Command::SelectPrevious => self.selected = self.selected.saturating_sub(1),
            Command::SelectNext => {
                let last = self.controller.session().history().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            Command::JumpToSelected => {
                let view = self.view();
                if let Some(entry) = view.moves().get(self.selected) {
                    self.dispatch(UiEvent::HistoryClicked(*entry.step()));
                }
            }
            Command::SwitchFocus => self.focus = self.focus.toggle(),
            Command::ToggleOrder => self.dispatch(UiEvent::ToggleOrder),
            Command::Reset => {
                self.cursor = Position::Center;
                self.dispatch(UiEvent::Reset);
            }
            Command::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Forwards an event to the controller and re-selects the current step.
    fn dispatch(&mut self, event: UiEvent) {
        self.controller.handle(event);
        self.selected = self
            .view()
            .moves()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}
