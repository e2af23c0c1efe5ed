use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Category, Portfolio, Project, RecordId, Section, UiConfig, filter_projects};
use crate::ops::record_ops::{self, ProjectDraft};

use super::action::Action;
use super::form::Form;
use super::input;
use super::render;
use super::theme::Theme;

/// Field labels of the add-project dialog, in tab order
pub const PROJECT_FIELDS: [&str; 3] = ["Project Name", "Tech Stack", "Project Description"];
/// Field labels of the add-skill dialog
pub const SKILL_FIELDS: [&str; 1] = ["Skill Name"];

/// Home UI state
#[derive(Debug, Clone, Default)]
pub struct HomeViewState {
    /// First visible content row (clamped at render time)
    pub scroll: usize,
}

/// Projects UI state
#[derive(Debug, Clone, Default)]
pub struct ProjectsViewState {
    pub category: Category,
    /// Cursor index into the filtered list
    pub cursor: usize,
    /// Expanded cards, keyed by record id so filtering never shifts them
    pub expanded: HashSet<RecordId>,
    /// Open add-project dialog
    pub dialog: Option<Form>,
}

/// Skills UI state
#[derive(Debug, Clone, Default)]
pub struct SkillsViewState {
    pub cursor: usize,
    pub dialog: Option<Form>,
}

/// Contact UI state. The contact list is immutable, so position is a stable key.
#[derive(Debug, Clone, Default)]
pub struct ContactViewState {
    pub cursor: usize,
    pub expanded: HashSet<usize>,
}

/// Main application state
pub struct App {
    pub portfolio: Portfolio,
    pub section: Section,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub home: HomeViewState,
    pub projects: ProjectsViewState,
    pub skills: SkillsViewState,
    pub contact: ContactViewState,
}

impl App {
    pub fn new(portfolio: Portfolio, ui: &UiConfig) -> Self {
        App {
            portfolio,
            section: ui.start_section,
            theme: Theme::from_config(ui),
            should_quit: false,
            show_help: false,
            show_key_hints: ui.show_key_hints,
            home: HomeViewState::default(),
            projects: ProjectsViewState::default(),
            skills: SkillsViewState::default(),
            contact: ContactViewState::default(),
        }
    }

    /// Projects under the selected tab, in list order
    pub fn visible_projects(&self) -> Vec<&Project> {
        filter_projects(&self.portfolio.projects, self.projects.category).collect()
    }

    /// Project under the cursor in the Projects section
    pub fn selected_project(&self) -> Option<&Project> {
        filter_projects(&self.portfolio.projects, self.projects.category)
            .nth(self.projects.cursor)
    }

    pub fn is_project_expanded(&self, id: RecordId) -> bool {
        self.projects.expanded.contains(&id)
    }

    pub fn is_contact_expanded(&self, idx: usize) -> bool {
        self.contact.expanded.contains(&idx)
    }

    /// The open dialog of the current section, if any
    pub fn dialog(&self) -> Option<&Form> {
        match self.section {
            Section::Projects => self.projects.dialog.as_ref(),
            Section::Skills => self.skills.dialog.as_ref(),
            Section::Home | Section::Contact => None,
        }
    }

    fn dialog_mut(&mut self) -> Option<&mut Form> {
        match self.section {
            Section::Projects => self.projects.dialog.as_mut(),
            Section::Skills => self.skills.dialog.as_mut(),
            Section::Home | Section::Contact => None,
        }
    }

    /// Apply one action. This is the only place UI state is mutated.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, section = ?self.section, "dispatch");

        if let Some(form) = self.dialog_mut() {
            // Dialogs are modal: only form editing, submit, cancel and quit get through
            match action {
                Action::InsertChar(c) => form.insert_char(c),
                Action::InsertText(text) => form.insert_str(&text),
                Action::Backspace => form.backspace(),
                Action::Delete => form.delete(),
                Action::CursorLeft => form.move_left(),
                Action::CursorRight => form.move_right(),
                Action::FocusNextField => form.focus_next(),
                Action::FocusPrevField => form.focus_prev(),
                Action::SubmitDialog => self.submit_dialog(),
                Action::CancelDialog => self.close_dialog(),
                Action::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match action {
            Action::SelectSection(section) => self.select_section(section),
            Action::NextSection => self.select_section(self.section.next()),
            Action::PrevSection => self.select_section(self.section.prev()),
            Action::SelectCategory(category) => self.select_category(category),
            Action::ToggleCategory => self.select_category(self.projects.category.other()),
            Action::CursorUp => self.move_cursor(-1),
            Action::CursorDown => self.move_cursor(1),
            Action::ToggleSelected => self.toggle_selected(),
            Action::ToggleProject(id) => self.toggle_project(id),
            Action::ToggleContact(idx) => self.toggle_contact(idx),
            Action::OpenDialog => self.open_dialog(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
            // Form editing without an open dialog
            Action::CancelDialog
            | Action::SubmitDialog
            | Action::InsertChar(_)
            | Action::InsertText(_)
            | Action::Backspace
            | Action::Delete
            | Action::CursorLeft
            | Action::CursorRight
            | Action::FocusNextField
            | Action::FocusPrevField => {}
        }
    }

    // -----------------------------------------------------------------------
    // Section router
    // -----------------------------------------------------------------------

    fn select_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        let leaving = self.section;
        self.reset_section_state(leaving);
        self.section = section;
    }

    /// Discard the transient state of a section being unmounted.
    /// Record lists live in the portfolio and are kept.
    fn reset_section_state(&mut self, section: Section) {
        match section {
            Section::Home => self.home = HomeViewState::default(),
            Section::Projects => self.projects = ProjectsViewState::default(),
            Section::Skills => self.skills = SkillsViewState::default(),
            Section::Contact => self.contact = ContactViewState::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Lists
    // -----------------------------------------------------------------------

    fn select_category(&mut self, category: Category) {
        if self.section != Section::Projects || self.projects.category == category {
            return;
        }
        self.projects.category = category;
        self.projects.cursor = 0;
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.section {
            Section::Home => {
                self.home.scroll = self.home.scroll.saturating_add_signed(delta);
                return;
            }
            Section::Projects => {
                let len = filter_projects(&self.portfolio.projects, self.projects.category).count();
                (&mut self.projects.cursor, len)
            }
            Section::Skills => (&mut self.skills.cursor, self.portfolio.skills.len()),
            Section::Contact => (&mut self.contact.cursor, self.portfolio.contacts.len()),
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn toggle_selected(&mut self) {
        match self.section {
            Section::Projects => {
                if let Some(id) = self.selected_project().map(|p| p.id) {
                    self.toggle_project(id);
                }
            }
            Section::Contact => self.toggle_contact(self.contact.cursor),
            Section::Home | Section::Skills => {}
        }
    }

    fn toggle_project(&mut self, id: RecordId) {
        if self.portfolio.find_project(id).is_none() {
            return;
        }
        if !self.projects.expanded.remove(&id) {
            self.projects.expanded.insert(id);
        }
    }

    fn toggle_contact(&mut self, idx: usize) {
        if idx >= self.portfolio.contacts.len() {
            return;
        }
        if !self.contact.expanded.remove(&idx) {
            self.contact.expanded.insert(idx);
        }
    }

    // -----------------------------------------------------------------------
    // Add-record dialogs
    // -----------------------------------------------------------------------

    fn open_dialog(&mut self) {
        match self.section {
            Section::Projects => self.projects.dialog = Some(Form::new(&PROJECT_FIELDS)),
            Section::Skills => self.skills.dialog = Some(Form::new(&SKILL_FIELDS)),
            Section::Home | Section::Contact => {}
        }
    }

    fn close_dialog(&mut self) {
        match self.section {
            Section::Projects => self.projects.dialog = None,
            Section::Skills => self.skills.dialog = None,
            Section::Home | Section::Contact => {}
        }
    }

    /// Append the dialog's record. A blank field leaves everything as is.
    fn submit_dialog(&mut self) {
        match self.section {
            Section::Projects => {
                let Some(form) = &self.projects.dialog else {
                    return;
                };
                let draft = ProjectDraft::new(form.value(0), form.value(1), form.value(2));
                let category = self.projects.category;
                match record_ops::add_project(&mut self.portfolio, &draft, category) {
                    Ok(_) => {
                        self.projects.dialog = None;
                        let len =
                            filter_projects(&self.portfolio.projects, category).count();
                        self.projects.cursor = len.saturating_sub(1);
                    }
                    Err(e) => tracing::debug!(error = %e, "add project rejected"),
                }
            }
            Section::Skills => {
                let Some(form) = &self.skills.dialog else {
                    return;
                };
                let name = form.value(0).to_string();
                match record_ops::add_skill(&mut self.portfolio, &name) {
                    Ok(_) => {
                        self.skills.dialog = None;
                        self.skills.cursor = self.portfolio.skills.len().saturating_sub(1);
                    }
                    Err(e) => tracing::debug!(error = %e, "add skill rejected"),
                }
            }
            Section::Home | Section::Contact => {}
        }
    }
}

/// Run the TUI application
pub fn run(ui: &UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Portfolio::seeded(), ui);
    tracing::info!(section = ?app.section, "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!("tui exited");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
