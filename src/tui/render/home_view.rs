use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::header::{HEADER_HEIGHT, render_profile_header};
use super::helpers::section_title;

/// Render the Home section: header, bio, education, achievements
pub fn render_home_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_profile_header(frame, app, chunks[0]);

    let body = chunks[1];
    let lines = build_home_lines(app, body.width as usize);

    // Clamp scroll so the last line stays at the bottom
    let height = body.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    app.home.scroll = app.home.scroll.min(max_scroll);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.home.scroll)
        .take(height)
        .collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, body);
}

fn build_home_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let portfolio = &app.portfolio;
    let text = Style::default().fg(theme.text).bg(theme.background);
    let dim = Style::default().fg(theme.dim).bg(theme.background);
    let bold = text.add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Bio"));
    for row in unicode::wrap_words(&portfolio.profile.bio, width.saturating_sub(4)) {
        lines.push(Line::from(Span::styled(format!("   {}", row), text)));
    }

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Education"));
    for (i, entry) in portfolio.education.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(Span::styled(
                format!("   {}", "\u{2500}".repeat(width.saturating_sub(6))),
                Style::default().fg(theme.divider).bg(theme.background),
            )));
        }
        lines.push(Line::from(Span::styled(format!("   {}", entry.degree), bold)));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.institution),
            text,
        )));
        lines.push(Line::from(Span::styled(format!("   {}", entry.year), dim)));
    }

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Achievements"));
    for item in &portfolio.achievements {
        lines.push(Line::from(vec![
            Span::styled(
                "   \u{2022} ",
                Style::default().fg(theme.primary).bg(theme.background),
            ),
            Span::styled(item.clone(), text),
        ]));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn home_shows_all_blocks() {
        let mut app = default_app();
        let output = render_to_string(TERM_W, 40, |frame, area| {
            render_home_view(frame, &mut app, area);
        });
        assert!(output.contains("John Doe"));
        assert!(output.contains("Bio"));
        assert!(output.contains("passionate Android Developer"));
        assert!(output.contains("Bachelor of Computer Science"));
        assert!(output.contains("Google Developers"));
        assert!(output.contains("2018-2022"));
        assert!(output.contains("\u{2022} Open Source Contributor"));
    }

    #[test]
    fn home_scroll_is_clamped() {
        let mut app = default_app();
        app.home.scroll = 1000;
        let output = render_to_string(TERM_W, 12, |frame, area| {
            render_home_view(frame, &mut app, area);
        });
        assert!(app.home.scroll < 1000);
        // scrolled to the bottom: last achievement visible, bio gone
        assert!(output.contains("Open Source Contributor"));
        assert!(!output.contains("passionate"));
    }
}
