use ratatui::style::Color;

use crate::model::{Category, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub primary: Color,
    pub secondary: Color,
    pub completed_bg: Color,
    pub completed_fg: Color,
    pub in_progress_bg: Color,
    pub in_progress_fg: Color,
    pub divider: Color,
    pub disabled: Color,
    pub on_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xF5, 0xF5, 0xF5),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x75, 0x75, 0x75),
            primary: Color::Rgb(0x21, 0x96, 0xF3),
            secondary: Color::Rgb(0x03, 0xDA, 0xC5),
            completed_bg: Color::Rgb(0xE8, 0xF5, 0xE9),
            completed_fg: Color::Rgb(0x38, 0x8E, 0x3C),
            in_progress_bg: Color::Rgb(0xFF, 0xF8, 0xE1),
            in_progress_fg: Color::Rgb(0xFF, 0xA0, 0x00),
            divider: Color::Rgb(0xE0, 0xE0, 0xE0),
            disabled: Color::Rgb(0xBD, 0xBD, 0xBD),
            on_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    // byte offsets below are only valid for ASCII
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "surface" => &mut theme.surface,
                "text" => &mut theme.text,
                "dim" => &mut theme.dim,
                "primary" => &mut theme.primary,
                "secondary" => &mut theme.secondary,
                "completed_bg" => &mut theme.completed_bg,
                "completed_fg" => &mut theme.completed_fg,
                "in_progress_bg" => &mut theme.in_progress_bg,
                "in_progress_fg" => &mut theme.in_progress_fg,
                "divider" => &mut theme.divider,
                "disabled" => &mut theme.disabled,
                "on_primary" => &mut theme.on_primary,
                _ => {
                    tracing::warn!(key = %key, "ignoring unknown color key");
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }

    /// (foreground, background) of a project card in the given category
    pub fn category_colors(&self, category: Category) -> (Color, Color) {
        match category {
            Category::Completed => (self.completed_fg, self.completed_bg),
            Category::InProgress => (self.in_progress_fg, self.in_progress_bg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#2196F3"),
            Some(Color::Rgb(0x21, 0x96, 0xF3))
        );
        assert_eq!(parse_hex_color("2196F3"), None); // missing #
        assert_eq!(parse_hex_color("#2196"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#1\u{e9}234"), None); // 6 bytes, 5 chars
        assert_eq!(parse_hex_color("x2196F3"), None); // 7 chars, no #
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("primary".into(), "#112233".into());
        ui.colors.insert("background".into(), "#000000".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.primary, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Unchanged defaults still present
        assert_eq!(theme.secondary, Color::Rgb(0x03, 0xDA, 0xC5));
    }

    #[test]
    fn test_invalid_overrides_fall_back() {
        let mut ui = UiConfig::default();
        ui.colors.insert("primary".into(), "blue".into());
        ui.colors.insert("nonsense".into(), "#123456".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.primary, Theme::default().primary);
    }

    #[test]
    fn test_multibyte_override_falls_back() {
        let mut ui = UiConfig::default();
        ui.colors.insert("primary".into(), "#1\u{e9}234".into());
        ui.colors.insert("divider".into(), "#\u{e9}\u{e9}\u{e9}".into());
        ui.colors.insert("text".into(), "x2196F3".into());

        let theme = Theme::from_config(&ui);
        let defaults = Theme::default();
        assert_eq!(theme.primary, defaults.primary);
        assert_eq!(theme.divider, defaults.divider);
        assert_eq!(theme.text, defaults.text);
    }

    #[test]
    fn test_category_colors() {
        let theme = Theme::default();
        assert_eq!(
            theme.category_colors(Category::Completed),
            (theme.completed_fg, theme.completed_bg)
        );
        assert_eq!(
            theme.category_colors(Category::InProgress),
            (theme.in_progress_fg, theme.in_progress_bg)
        );
    }
}
