use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Section;
use crate::tui::app::App;
use crate::util::unicode;

/// Render the bottom navigation bar: separator line above one cell per section
pub fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // separator
            Constraint::Length(1), // items
        ])
        .split(area);

    let width = area.width as usize;
    let separator = Paragraph::new("\u{2500}".repeat(width))
        .style(Style::default().fg(app.theme.divider).bg(app.theme.surface));
    frame.render_widget(separator, chunks[0]);

    let cell = width / Section::ALL.len();
    let mut spans: Vec<Span> = Vec::new();
    for (i, section) in Section::ALL.iter().enumerate() {
        let label = format!("{} {}", i + 1, section.label());
        let is_current = app.section == *section;
        // last cell absorbs the remainder
        let cell_w = if i == Section::ALL.len() - 1 {
            width - cell * i
        } else {
            cell
        };
        let pad = cell_w.saturating_sub(unicode::display_width(&label));
        let left = pad / 2;
        spans.push(Span::styled(
            format!("{}{}{}", " ".repeat(left), label, " ".repeat(pad - left)),
            item_style(app, is_current),
        ));
    }
    let items = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.surface));
    frame.render_widget(items, chunks[1]);
}

/// Style for a nav item: primary and bold if current, gray otherwise
fn item_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.primary)
            .bg(app.theme.surface)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.surface)
    }
}
