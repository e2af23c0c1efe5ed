use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// A single-line text input inside a dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Byte offset of the edit cursor, always on a grapheme boundary
    pub cursor: usize,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        FormField {
            label,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Pending values of an add-record dialog. Dropped on cancel or submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<FormField>,
    /// Index of the focused field
    pub focus: usize,
}

impl Form {
    pub fn new(labels: &[&'static str]) -> Self {
        Form {
            fields: labels.iter().copied().map(FormField::new).collect(),
            focus: 0,
        }
    }

    /// Value of the field at `idx` (empty if out of range)
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map_or("", |f| f.value.as_str())
    }

    /// The submit control is enabled only when no field is blank
    pub fn can_submit(&self) -> bool {
        self.fields.iter().all(|f| !f.is_blank())
    }

    fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focus)
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_mut() {
            field.value.insert(field.cursor, c);
            field.cursor += c.len_utf8();
        }
    }

    /// Insert pasted text; fields are single-line so newlines become spaces
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace('\r', "").replace('\n', " ");
        if let Some(field) = self.focused_mut() {
            field.value.insert_str(field.cursor, &clean);
            field.cursor += clean.len();
        }
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut()
            && let Some(prev) = prev_grapheme_boundary(&field.value, field.cursor)
        {
            field.value.replace_range(prev..field.cursor, "");
            field.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(field) = self.focused_mut()
            && let Some(next) = next_grapheme_boundary(&field.value, field.cursor)
        {
            field.value.replace_range(field.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(field) = self.focused_mut()
            && let Some(prev) = prev_grapheme_boundary(&field.value, field.cursor)
        {
            field.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(field) = self.focused_mut()
            && let Some(next) = next_grapheme_boundary(&field.value, field.cursor)
        {
            field.cursor = next;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_str(form: &mut Form, s: &str) {
        for c in s.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_can_submit_requires_all_fields() {
        let mut form = Form::new(&["Name", "Tech Stack"]);
        assert!(!form.can_submit());
        type_str(&mut form, "Folio");
        assert!(!form.can_submit());
        form.focus_next();
        type_str(&mut form, "   ");
        assert!(!form.can_submit());
        type_str(&mut form, "Rust");
        assert!(form.can_submit());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::new(&["A", "B", "C"]);
        form.focus_prev();
        assert_eq!(form.focus, 2);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_backspace_and_cursor_moves() {
        let mut form = Form::new(&["Name"]);
        type_str(&mut form, "Rusty");
        form.backspace();
        assert_eq!(form.value(0), "Rust");
        form.move_left();
        form.move_left();
        form.insert_char('-');
        assert_eq!(form.value(0), "Ru-st");
        form.delete();
        assert_eq!(form.value(0), "Ru-t");
        form.move_right();
        form.move_right();
        form.insert_char('!');
        assert_eq!(form.value(0), "Ru-t!");
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut form = Form::new(&["Name"]);
        form.insert_str("cafe\u{301}");
        form.backspace();
        assert_eq!(form.value(0), "caf");
        assert_eq!(form.fields[0].cursor, 3);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut form = Form::new(&["Name"]);
        form.backspace();
        form.move_left();
        assert_eq!(form.value(0), "");
        assert_eq!(form.fields[0].cursor, 0);
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut form = Form::new(&["Description"]);
        form.insert_str("line one\r\nline two");
        assert_eq!(form.value(0), "line one line two");
    }

    #[test]
    fn test_value_out_of_range() {
        let form = Form::new(&["A"]);
        assert_eq!(form.value(5), "");
    }
}
