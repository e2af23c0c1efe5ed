use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Section;
use crate::tui::app::App;
use crate::tui::form::{Form, FormField};
use crate::util::unicode;

/// Render the add-record dialog of the current section, if one is open
pub fn render_dialog_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.dialog() else {
        return;
    };
    let (title, submit_label) = match app.section {
        Section::Projects => ("Add New Project", "Add Project"),
        _ => ("Add New Skill", "Add"),
    };

    let theme = &app.theme;
    let bg = theme.surface;
    let popup_w: u16 = 60.min(area.width.saturating_sub(4));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(theme.text)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, field) in form.fields.iter().enumerate() {
        push_field(&mut lines, app, field, i == form.focus, inner_w);
    }

    lines.push(button_row(app, form, submit_label, inner_w));

    let popup_h = (lines.len() as u16 + 2).min(area.height);
    let popup_area = super::helpers::centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(theme.text).bg(bg));
    frame.render_widget(paragraph, popup_area);
}

/// Label, boxed value with a cursor when focused, spacer
fn push_field(lines: &mut Vec<Line>, app: &App, field: &FormField, focused: bool, width: usize) {
    let theme = &app.theme;
    let bg = theme.surface;
    let label_color = if focused { theme.primary } else { theme.dim };
    lines.push(Line::from(Span::styled(
        format!(" {}", field.label),
        Style::default().fg(label_color).bg(bg),
    )));

    let value_w = width.saturating_sub(4);
    let text = Style::default().fg(theme.text).bg(bg);
    let mut spans = vec![Span::styled(" \u{2502} ", Style::default().fg(label_color).bg(bg))];
    if focused {
        let (before, after) = field.value.split_at(field.cursor);
        // Keep the cursor visible by dropping leading text
        let before_w = unicode::display_width(before);
        let before = if before_w + 1 > value_w {
            tail_to_width(before, value_w.saturating_sub(1))
        } else {
            before.to_string()
        };
        let room = value_w.saturating_sub(unicode::display_width(&before) + 1);
        spans.push(Span::styled(before, text));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.primary).bg(bg),
        ));
        spans.push(Span::styled(unicode::truncate_to_width(after, room), text));
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(&field.value, value_w),
            text,
        ));
    }
    lines.push(Line::from(spans));
    lines.push(Line::from(""));
}

/// Rightmost part of `s` that fits in `cells`
fn tail_to_width(s: &str, cells: usize) -> String {
    let mut out: Vec<char> = Vec::new();
    let mut w = 0;
    for c in s.chars().rev() {
        let cw = unicode::display_width(c.encode_utf8(&mut [0; 4]));
        if w + cw > cells {
            break;
        }
        w += cw;
        out.push(c);
    }
    out.into_iter().rev().collect()
}

/// "Cancel  [Add Project]", submit drawn disabled while any field is blank
fn button_row<'a>(app: &App, form: &Form, submit_label: &str, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = theme.surface;
    let cancel = " Cancel (Esc) ".to_string();
    let submit = format!(" {} (Enter) ", submit_label);
    let submit_style = if form.can_submit() {
        Style::default()
            .fg(theme.on_primary)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.on_primary).bg(theme.disabled)
    };
    let used = unicode::display_width(&cancel) + unicode::display_width(&submit) + 2;
    Line::from(vec![
        Span::styled(" ".repeat(width.saturating_sub(used)), Style::default().bg(bg)),
        Span::styled(cancel, Style::default().fg(theme.primary).bg(bg)),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(submit, submit_style),
    ])
}
