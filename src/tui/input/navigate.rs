use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{Category, Section};
use crate::tui::action::Action;
use crate::tui::app::App;

/// Map a key to an action when no dialog or overlay is open
pub(super) fn navigate_action(app: &App, key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,

        // Bottom navigation
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            Action::SelectSection(Section::from_index(idx)?)
        }
        KeyCode::Tab => Action::NextSection,
        KeyCode::BackTab => Action::PrevSection,

        KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleSelected,

        // Projects tabs
        KeyCode::Char('h') | KeyCode::Left if app.section == Section::Projects => {
            Action::SelectCategory(Category::Completed)
        }
        KeyCode::Char('l') | KeyCode::Right if app.section == Section::Projects => {
            Action::SelectCategory(Category::InProgress)
        }

        KeyCode::Char('a') if matches!(app.section, Section::Projects | Section::Skills) => {
            Action::OpenDialog
        }

        _ => return None,
    };
    Some(action)
}
