use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;
use crate::util::unicode;

/// Chevron for an expandable card
pub(super) fn chevron(expanded: bool) -> &'static str {
    if expanded { "\u{25BE}" } else { "\u{25B8}" }
}

/// Left-edge marker for the row under the cursor
pub(super) fn cursor_marker(selected: bool) -> &'static str {
    if selected { "\u{258C}" } else { " " }
}

/// Bold section heading in the primary color, e.g. "Education"
pub(super) fn section_title(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ", Style::default().bg(theme.background)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.primary)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Full-width button row, e.g. "[a] Add New Project"
pub(super) fn button_line(theme: &Theme, label: &str, width: u16) -> Line<'static> {
    let text = format!("+ {}  [a]", label);
    let w = width as usize;
    let pad = w.saturating_sub(unicode::display_width(&text));
    let left = pad / 2;
    let right = pad - left;
    Line::from(Span::styled(
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right)),
        Style::default()
            .fg(theme.on_primary)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Fill a line with `bg` out to `width` cells
pub(super) fn pad_line(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// First line to draw so that rows `start..end` of `total` are visible in `height`
pub(super) fn scroll_to_show(start: usize, end: usize, height: usize) -> usize {
    if height == 0 || end <= height {
        return 0;
    }
    // Keep the whole block visible when it fits, else its first line
    if end - start <= height {
        end - height
    } else {
        start
    }
}

/// Text-mode progress bar of `width` cells
pub(super) fn level_bar(level: f32, width: usize) -> (String, String) {
    let filled = ((level.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    ("\u{2588}".repeat(filled), "\u{2591}".repeat(width - filled))
}

/// A `width` x `height` rect centered in `area`
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_show() {
        assert_eq!(scroll_to_show(0, 3, 10), 0);
        assert_eq!(scroll_to_show(10, 13, 10), 3);
        // block taller than the viewport: show its top
        assert_eq!(scroll_to_show(10, 25, 10), 10);
        assert_eq!(scroll_to_show(5, 6, 0), 0);
    }

    #[test]
    fn test_level_bar() {
        let (filled, empty) = level_bar(0.5, 10);
        assert_eq!(filled.chars().count(), 5);
        assert_eq!(empty.chars().count(), 5);
        let (filled, empty) = level_bar(1.2, 4);
        assert_eq!(filled.chars().count(), 4);
        assert_eq!(empty, "");
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(20, 7, 40, 10));
        // clamps to area
        assert_eq!(centered_rect_fixed(100, 30, area), area);
    }
}
