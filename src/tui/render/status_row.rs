use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Section;
use crate::tui::app::App;

/// Context key hints for the current section or dialog
pub fn key_hints(app: &App) -> &'static str {
    if app.dialog().is_some() {
        return "Tab next field  Enter add  Esc cancel";
    }
    if app.show_help {
        return "? close help";
    }
    match app.section {
        Section::Home => "1-4 sections  j/k scroll  ? help  q quit",
        Section::Projects => "h/l tab  j/k move  Enter expand  a add  ? help  q quit",
        Section::Skills => "j/k move  a add  ? help  q quit",
        Section::Contact => "j/k move  Enter expand  ? help  q quit",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.show_key_hints {
        Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };
    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
