pub mod contact_view;
pub mod dialog_popup;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod home_view;
pub mod nav_bar;
pub mod projects_view;
pub mod skills_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::model::Section;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: content | nav bar (2 rows) | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // content area
            Constraint::Length(2), // separator + nav items
            Constraint::Length(1), // status row
        ])
        .split(area);

    match app.section {
        Section::Home => home_view::render_home_view(frame, app, chunks[0]),
        Section::Projects => projects_view::render_projects_view(frame, app, chunks[0]),
        Section::Skills => skills_view::render_skills_view(frame, app, chunks[0]),
        Section::Contact => contact_view::render_contact_view(frame, app, chunks[0]),
    }

    nav_bar::render_nav_bar(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Add dialog (modal, on top of the section)
    if app.dialog().is_some() {
        dialog_popup::render_dialog_popup(frame, app, area);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::action::Action;
    use test_helpers::*;

    fn render_app(app: &mut App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, _| render(frame, app))
    }

    #[test]
    fn full_frame_has_content_nav_and_hints() {
        let mut app = default_app();
        let output = render_app(&mut app);
        assert!(output.contains("John Doe"));
        assert!(output.contains("2 Projects"));
        assert!(output.contains("? help"));
    }

    #[test]
    fn full_frame_follows_section() {
        let mut app = default_app();
        app.dispatch(Action::SelectSection(Section::Contact));
        let output = render_app(&mut app);
        assert!(output.contains("Contact Me"));
        assert!(!output.contains("Bio"));
    }

    #[test]
    fn full_frame_draws_dialog_over_section() {
        let mut app = app_in(Section::Skills);
        app.dispatch(Action::OpenDialog);
        let output = render_app(&mut app);
        assert!(output.contains("Add New Skill"));
        assert!(output.contains("Esc cancel"));
    }
}
