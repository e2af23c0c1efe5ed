use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Rows taken by the profile header, borders included
pub const HEADER_HEIGHT: u16 = 4;

/// Render the profile card: name and job title, centered
pub fn render_profile_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let profile = &app.portfolio.profile;

    let lines = vec![
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.title.as_str(),
            Style::default().fg(theme.secondary),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.divider))
        .style(Style::default().bg(theme.surface));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_name_and_title() {
        let app = default_app();
        let output = render_to_string(TERM_W, HEADER_HEIGHT, |frame, area| {
            render_profile_header(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("John Doe"));
        assert!(lines[2].contains("Android Developer"));
    }
}
