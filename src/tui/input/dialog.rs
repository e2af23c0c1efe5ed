use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::action::Action;

/// Map a key to an action while an add-record dialog is open
pub(super) fn dialog_action(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Esc => Action::CancelDialog,
        KeyCode::Enter => Action::SubmitDialog,
        KeyCode::Tab | KeyCode::Down => Action::FocusNextField,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Action::InsertChar(c)
        }
        _ => return None,
    };
    Some(action)
}
