use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{chevron, cursor_marker, pad_line, scroll_to_show, section_title};

/// Render the Contact section: one expandable card per contact
pub fn render_contact_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let theme = &app.theme;
    let title = Paragraph::new(vec![Line::from(""), section_title(theme, "Contact Me")])
        .style(Style::default().bg(theme.background));
    frame.render_widget(title, chunks[0]);

    let width = chunks[1].width as usize;
    let card = Style::default().fg(theme.text).bg(theme.surface);
    let marker = Style::default().fg(theme.primary).bg(theme.surface);
    let mut lines: Vec<Line> = vec![Line::from("")];
    let mut cursor_rows = (0, 0);

    for (i, contact) in app.portfolio.contacts.iter().enumerate() {
        let selected = i == app.contact.cursor;
        let expanded = app.is_contact_expanded(i);
        let start = lines.len();

        let mut spans = vec![
            Span::styled(cursor_marker(selected), marker),
            Span::styled(
                format!(" {}  ", contact.icon.glyph()),
                Style::default().fg(theme.primary).bg(theme.surface),
            ),
            Span::styled(
                contact.label.as_str(),
                card.add_modifier(Modifier::BOLD),
            ),
        ];
        let used = super::helpers::spans_width(&spans);
        spans.push(Span::styled(" ".repeat(width.saturating_sub(used + 3)), card));
        spans.push(Span::styled(chevron(expanded), card));
        pad_line(&mut spans, width, card);
        lines.push(Line::from(spans));

        if expanded {
            let mut spans = vec![
                Span::styled(cursor_marker(selected), marker),
                Span::styled("    ", card),
                Span::styled(
                    unicode::truncate_to_width(&contact.value, width.saturating_sub(6)),
                    Style::default().fg(theme.dim).bg(theme.surface),
                ),
            ];
            pad_line(&mut spans, width, card);
            lines.push(Line::from(spans));
        }
        if selected {
            cursor_rows = (start, lines.len());
        }

        lines.push(Line::from(""));
    }

    let height = chunks[1].height as usize;
    let offset = scroll_to_show(cursor_rows.0, cursor_rows.1, height);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::tui::action::Action;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_contact_view(frame, app, area);
        })
    }

    #[test]
    fn contact_collapsed_shows_labels_only() {
        let app = app_in(Section::Contact);
        let output = render(&app);
        assert!(output.contains("Contact Me"));
        for label in ["Email", "Phone", "LinkedIn", "GitHub"] {
            assert!(output.contains(label), "missing {label}");
        }
        assert!(!output.contains("johndoe@gmail.com"));
    }

    #[test]
    fn contact_expanded_shows_value() {
        let mut app = app_in(Section::Contact);
        app.dispatch(Action::ToggleContact(3));
        let output = render(&app);
        assert!(output.contains("github.com/johndoe"));
        assert!(!output.contains("johndoe@gmail.com"));

        app.dispatch(Action::ToggleContact(3));
        let output = render(&app);
        assert!(!output.contains("github.com/johndoe"));
    }

    #[test]
    fn contact_cursor_stays_visible_on_short_terminal() {
        let mut app = app_in(Section::Contact);
        for _ in 0..3 {
            app.dispatch(Action::CursorDown);
        }
        app.dispatch(Action::ToggleSelected);
        // title (2 rows) leaves 6 list rows: too few for all four cards
        let output = render_to_string(TERM_W, 8, |frame, area| {
            render_contact_view(frame, &app, area);
        });
        assert!(output.contains("GitHub"));
        assert!(output.contains("github.com/johndoe"));
        assert!(!output.contains("Email"));
    }
}
