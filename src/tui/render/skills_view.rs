use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Skill;
use crate::tui::app::App;
use crate::util::unicode;

use super::header::{HEADER_HEIGHT, render_profile_header};
use super::helpers::{button_line, cursor_marker, level_bar, scroll_to_show, section_title};

const COLUMNS: usize = 2;
/// Rows per grid row: name, bar, spacer
const CARD_ROWS: usize = 3;

/// Render the Skills section: header, two-column skill grid, add button
pub fn render_skills_view(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(2), // title + gap
            Constraint::Min(1),    // grid
            Constraint::Length(1), // add button
        ])
        .split(area);

    render_profile_header(frame, app, chunks[0]);

    let title = Paragraph::new(vec![section_title(&app.theme, "My Skills"), Line::from("")])
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(title, chunks[1]);

    render_grid(frame, app, chunks[2]);

    let button = Paragraph::new(button_line(&app.theme, "Add New Skill", chunks[3].width));
    frame.render_widget(button, chunks[3]);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    // one-cell gutter on each side and between columns
    let card_w = width.saturating_sub(COLUMNS + 1) / COLUMNS;
    let mut lines: Vec<Line> = Vec::new();

    for (row_idx, row) in app.portfolio.skills.chunks(COLUMNS).enumerate() {
        let mut name_spans = vec![gutter(app)];
        let mut bar_spans = vec![gutter(app)];
        for (col, skill) in row.iter().enumerate() {
            let selected = row_idx * COLUMNS + col == app.skills.cursor;
            let (name, bar) = skill_card(app, skill, selected, card_w);
            name_spans.extend(name);
            name_spans.push(gutter(app));
            bar_spans.extend(bar);
            bar_spans.push(gutter(app));
        }
        lines.push(Line::from(name_spans));
        lines.push(Line::from(bar_spans));
        lines.push(Line::from(""));
    }

    let cursor_row = app.skills.cursor / COLUMNS;
    let start = cursor_row * CARD_ROWS;
    let height = area.height as usize;
    let offset = scroll_to_show(start, start + CARD_ROWS - 1, height);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn gutter(app: &App) -> Span<'static> {
    Span::styled(" ", Style::default().bg(app.theme.background))
}

/// The two rows of one skill card, each exactly `card_w` cells wide
fn skill_card(
    app: &App,
    skill: &Skill,
    selected: bool,
    card_w: usize,
) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
    let theme = &app.theme;
    let card = Style::default().fg(theme.text).bg(theme.surface);
    let marker = Style::default().fg(theme.primary).bg(theme.surface);
    let name_style = if selected {
        card.add_modifier(Modifier::BOLD)
    } else {
        card
    };

    // ▌◆ Name
    let head = format!("{} ", skill.icon.glyph());
    let name_w = card_w.saturating_sub(1 + unicode::display_width(&head));
    let name_row = vec![
        Span::styled(cursor_marker(selected), marker),
        Span::styled(head, Style::default().fg(theme.primary).bg(theme.surface)),
        Span::styled(unicode::pad_to_width(&skill.name, name_w), name_style),
    ];

    // ▌████░░ 85%
    let percent = format!(" {:>3}%", skill.percent());
    let bar_w = card_w.saturating_sub(1 + percent.len());
    let (filled, empty) = level_bar(skill.level, bar_w);
    let bar_row = vec![
        Span::styled(cursor_marker(selected), marker),
        Span::styled(filled, Style::default().fg(theme.primary).bg(theme.surface)),
        Span::styled(empty, Style::default().fg(theme.divider).bg(theme.surface)),
        Span::styled(percent, Style::default().fg(theme.dim).bg(theme.surface)),
    ];

    (name_row, bar_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use crate::tui::action::Action;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_skills_view(frame, app, area);
        })
    }

    #[test]
    fn skills_grid_shows_names_and_levels() {
        let app = app_in(Section::Skills);
        let output = render(&app);
        assert!(output.contains("My Skills"));
        // first grid row holds two skills side by side
        let row = output.lines().find(|l| l.contains("Kotlin")).unwrap();
        assert!(row.contains("Jetpack Compose"));
        assert!(output.contains(" 90%"));
        assert!(output.contains(" 85%"));
        assert!(output.contains("Add New Skill"));
    }

    #[test]
    fn skills_new_skill_scrolls_into_view() {
        let mut app = app_in(Section::Skills);
        app.dispatch(Action::OpenDialog);
        for c in "Rust".chars() {
            app.dispatch(Action::InsertChar(c));
        }
        app.dispatch(Action::SubmitDialog);
        let output = render(&app);
        assert!(output.contains("Rust"));
        assert!(output.contains(" 75%"));
    }
}
