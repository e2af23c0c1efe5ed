use crate::model::{Category, RecordId, Section};

/// Every state mutation the UI can perform. Produced by the input layer,
/// consumed by `App::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Section router
    SelectSection(Section),
    NextSection,
    PrevSection,

    // Projects tabs
    SelectCategory(Category),
    ToggleCategory,

    // Lists
    CursorUp,
    CursorDown,
    /// Toggle the card under the cursor in the current section
    ToggleSelected,
    ToggleProject(RecordId),
    ToggleContact(usize),

    // Add-record dialog
    OpenDialog,
    CancelDialog,
    SubmitDialog,
    InsertChar(char),
    InsertText(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    FocusNextField,
    FocusPrevField,

    ToggleHelp,
    Quit,
}
