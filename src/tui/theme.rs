use ratatui::style::Color;

use crate::model::{MoodKind, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Empty but valid day
    pub empty_cell: Color,
    /// Layout-only day (e.g. Feb 30)
    pub placeholder: Color,
    pub today: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    /// Per-mood fill, indexed by `MoodKind::index()`
    pub mood_colors: [Color; 5],
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            empty_cell: Color::Rgb(0x2A, 0x22, 0x44),
            placeholder: Color::Rgb(0x16, 0x0C, 0x28),
            today: Color::Rgb(0x40, 0xE0, 0xD0),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            mood_colors: MoodKind::ALL.map(|m| {
                parse_hex_color(m.default_color()).unwrap_or(Color::Reset)
            }),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
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
                tracing::warn!(key = %key, value = %value, "ignoring unparseable color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "empty_cell" => theme.empty_cell = color,
                "placeholder" => theme.placeholder = color,
                "today" => theme.today = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                _ => tracing::warn!(key = %key, "unknown theme color"),
            }
        }

        for mood in MoodKind::ALL {
            if let Some(color) = ui.mood_colors.get(mood.key()).and_then(|v| parse_hex_color(v)) {
                theme.mood_colors[mood.index()] = color;
            }
        }

        theme
    }

    pub fn mood_color(&self, mood: MoodKind) -> Color {
        self.mood_colors[mood.index()]
    }
}
