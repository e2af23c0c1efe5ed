use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Portfolio, Section, UiConfig};
use crate::tui::action::Action;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App over the seeded portfolio, starting on Home.
pub fn default_app() -> App {
    App::new(Portfolio::seeded(), &UiConfig::default())
}

/// Seeded app switched to `section`.
pub fn app_in(section: Section) -> App {
    let mut app = default_app();
    app.dispatch(Action::SelectSection(section));
    app
}

/// App with profile data but no projects or skills, on Projects.
pub fn empty_app() -> App {
    let mut app = App::new(Portfolio::empty(), &UiConfig::default());
    app.dispatch(Action::SelectSection(Section::Projects));
    app
}
