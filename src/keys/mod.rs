use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical key actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Up,
    Down,
    ToggleMode,
    NewNote,
    Input(char),
    Backspace,
    Cancel,
    Quit,
}

impl KeyAction {
    /// Short key label for display in the status bar.
    pub fn key_label(&self) -> &'static str {
        match self {
            KeyAction::Up => "k/\u{2191}",
            KeyAction::Down => "j/\u{2193}",
            KeyAction::ToggleMode => "e",
            KeyAction::NewNote => "n",
            KeyAction::Input(_) => "type",
            KeyAction::Backspace => "Bksp",
            KeyAction::Cancel => "Esc",
            KeyAction::Quit => "q",
        }
    }
}

/// Map a key event to a logical action.
///
/// While `editing`, printable keys are text input and only arrows, Esc and
/// Ctrl+C keep their meaning. Other Ctrl/Alt chords are ignored there.
pub fn map_key(event: KeyEvent, editing: bool) -> Option<KeyAction> {
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyAction::Quit);
    }

    match event.code {
        KeyCode::Up => return Some(KeyAction::Up),
        KeyCode::Down => return Some(KeyAction::Down),
        KeyCode::Esc => return Some(KeyAction::Cancel),
        _ => {}
    }

    if editing {
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        return match event.code {
            KeyCode::Char(c) => Some(KeyAction::Input(c)),
            KeyCode::Backspace => Some(KeyAction::Backspace),
            KeyCode::Enter => Some(KeyAction::NewNote),
            _ => None,
        };
    }

    match event.code {
        // Vim-style navigation
        KeyCode::Char('k') => Some(KeyAction::Up),
        KeyCode::Char('j') => Some(KeyAction::Down),

        KeyCode::Char('e') | KeyCode::Enter => Some(KeyAction::ToggleMode),
        KeyCode::Char('n') => Some(KeyAction::NewNote),
        KeyCode::Char('q') => Some(KeyAction::Quit),

        _ => None,
    }
}
