use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Category, Project};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{button_line, chevron, cursor_marker, pad_line, scroll_to_show};

/// Render the Projects section: category tabs, filtered cards, add button
pub fn render_projects_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // tab underline
            Constraint::Min(1),    // list
            Constraint::Length(1), // add button
        ])
        .split(area);

    render_category_tabs(frame, app, chunks[0], chunks[1]);

    let visible = app.visible_projects();
    if visible.is_empty() {
        render_empty(frame, app, chunks[2]);
    } else {
        render_cards(frame, app, &visible, chunks[2]);
    }

    let button = Paragraph::new(button_line(&app.theme, "Add New Project", chunks[3].width));
    frame.render_widget(button, chunks[3]);
}

fn render_category_tabs(frame: &mut Frame, app: &App, tab_area: Rect, line_area: Rect) {
    let theme = &app.theme;
    let half = (tab_area.width / 2) as usize;
    let mut spans = Vec::new();
    let mut underline = Vec::new();

    for category in [Category::Completed, Category::InProgress] {
        let selected = app.projects.category == category;
        let style = if selected {
            Style::default()
                .fg(theme.primary)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(theme.surface)
        };
        let label = category.label();
        let pad = half.saturating_sub(unicode::display_width(label));
        let left = pad / 2;
        spans.push(Span::styled(
            format!(
                "{}{}{}",
                " ".repeat(left),
                label,
                " ".repeat(pad - left)
            ),
            style,
        ));

        let (glyph, color) = if selected {
            ("\u{2501}", theme.primary)
        } else {
            ("\u{2500}", theme.divider)
        };
        underline.push(Span::styled(
            glyph.repeat(half),
            Style::default().fg(color).bg(theme.background),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), tab_area);
    frame.render_widget(Paragraph::new(Line::from(underline)), line_area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let message = app.projects.category.empty_message();
    let top = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        message,
        Style::default().fg(theme.dim),
    )));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, area);
}

fn render_cards(frame: &mut Frame, app: &App, projects: &[&Project], area: Rect) {
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_rows = (0, 0);

    for (i, project) in projects.iter().enumerate() {
        let selected = i == app.projects.cursor;
        let start = lines.len();
        push_card(&mut lines, app, project, selected, width);
        if selected {
            cursor_rows = (start, lines.len());
        }
    }

    let height = area.height as usize;
    let offset = scroll_to_show(cursor_rows.0, cursor_rows.1, height);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Card: title row with status, plus detail rows when expanded, plus a spacer
fn push_card<'a>(
    lines: &mut Vec<Line<'a>>,
    app: &App,
    project: &'a Project,
    selected: bool,
    width: usize,
) {
    let theme = &app.theme;
    let expanded = app.is_project_expanded(project.id);
    let (status_fg, card_bg) = theme.category_colors(project.category());
    let card = Style::default().fg(theme.text).bg(card_bg);
    let name_style = card.add_modifier(Modifier::BOLD);
    let marker_style = Style::default().fg(theme.primary).bg(card_bg);

    // Title row: ▌ ▸ Name ........ Completed
    let status = project.category().label();
    let fixed = 4 + unicode::display_width(status) + 2;
    let name = unicode::truncate_to_width(&project.name, width.saturating_sub(fixed));
    let mut spans = vec![
        Span::styled(cursor_marker(selected), marker_style),
        Span::styled(format!(" {} ", chevron(expanded)), card),
        Span::styled(name, name_style),
    ];
    let used = super::helpers::spans_width(&spans);
    let gap = width.saturating_sub(used + unicode::display_width(status) + 1);
    spans.push(Span::styled(" ".repeat(gap), card));
    spans.push(Span::styled(status, Style::default().fg(status_fg).bg(card_bg)));
    pad_line(&mut spans, width, card);
    lines.push(Line::from(spans));

    if expanded {
        let label = card.add_modifier(Modifier::BOLD);
        for (key, value) in [
            ("Tech Stack:", project.tech_stack.as_str()),
            ("Description:", project.description.as_str()),
        ] {
            let rows = unicode::wrap_words(value, width.saturating_sub(19));
            for (row_idx, row) in rows.into_iter().enumerate() {
                let head = if row_idx == 0 { key } else { "" };
                let mut spans = vec![
                    Span::styled(cursor_marker(selected), marker_style),
                    Span::styled("   ", card),
                    Span::styled(format!("{:<14}", head), label),
                    Span::styled(row, card),
                ];
                pad_line(&mut spans, width, card);
                lines.push(Line::from(spans));
            }
        }
    }

    lines.push(Line::from(Span::styled(
        " ".repeat(width),
        Style::default().bg(theme.background),
    )));
}
