mod dialog;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::app::App;

use dialog::dialog_action;
use navigate::navigate_action;

/// Handle a key event: translate it to an action for the current context
/// and dispatch it.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.dispatch(Action::Quit);
        return;
    }

    let action = if app.dialog().is_some() {
        dialog_action(key)
    } else if app.show_help {
        help_action(key)
    } else {
        navigate_action(app, key)
    };

    if let Some(action) = action {
        app.dispatch(action);
    }
}

/// Handle a bracketed paste event. Only an open dialog accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.dialog().is_none() || text.is_empty() {
        return;
    }
    app.dispatch(Action::InsertText(text.to_string()));
}

/// Help overlay intercepts everything except close and quit
fn help_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => Some(Action::ToggleHelp),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
