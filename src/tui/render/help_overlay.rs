use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Section;
use crate::tui::app::App;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.surface;
    let key_style = Style::default()
        .fg(app.theme.primary)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Sections", header_style)));
    add_binding(&mut lines, " 1-4", "Jump to section", key_style, desc_style);
    add_binding(&mut lines, " Tab/S-Tab", "Next / previous section", key_style, desc_style);
    lines.push(Line::from(""));

    // Context-sensitive help
    lines.push(Line::from(Span::styled(
        format!(" {}", app.section.label()),
        header_style,
    )));
    match app.section {
        Section::Home => {
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Scroll", key_style, desc_style);
        }
        Section::Projects => {
            add_binding(&mut lines, " \u{2190}\u{2192}/hl", "Switch Completed / In Progress", key_style, desc_style);
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter/Space", "Expand / collapse project", key_style, desc_style);
            add_binding(&mut lines, " a", "Add new project", key_style, desc_style);
        }
        Section::Skills => {
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " a", "Add new skill", key_style, desc_style);
        }
        Section::Contact => {
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
            add_binding(&mut lines, " Enter/Space", "Show / hide details", key_style, desc_style);
        }
    }
    lines.push(Line::from(""));

    if matches!(app.section, Section::Projects | Section::Skills) {
        lines.push(Line::from(Span::styled(" Add dialog", header_style)));
        add_binding(&mut lines, " Tab/S-Tab", "Next / previous field", key_style, desc_style);
        add_binding(&mut lines, " Enter", "Add (all fields required)", key_style, desc_style);
        add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(" General", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q/Ctrl-C", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(" Help ")
        .title_style(Style::default().fg(app.theme.primary).bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
