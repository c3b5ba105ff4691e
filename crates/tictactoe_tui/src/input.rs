//! Keyboard mapping for the board and the move list.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a board index.
    PlaceAt(usize),
    /// Move the move-list selection up.
    SelectPrevious,
    /// Move the move-list selection down.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpToSelected,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleOrder,
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key to a command for the focused panel.
pub fn command_for(focus: Focus, key: KeyCode) -> Option<Command> {
    match (focus, key) {
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Command::Quit),
        (_, KeyCode::Char('r')) => Some(Command::Reset),
        (_, KeyCode::Char('o')) => Some(Command::ToggleOrder),
        (_, KeyCode::Tab) => Some(Command::SwitchFocus),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| Command::PlaceAt(d as usize - 1)),

        (Focus::Board, KeyCode::Enter) | (Focus::Board, KeyCode::Char(' ')) => {
            Some(Command::PlaceAtCursor)
        }
        (Focus::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::MoveCursor(key))
        }

        (Focus::History, KeyCode::Up) => Some(Command::SelectPrevious),
        (Focus::History, KeyCode::Down) => Some(Command::SelectNext),
        (Focus::History, KeyCode::Enter) | (Focus::History, KeyCode::Char(' ')) => {
            Some(Command::JumpToSelected)
        }

        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
