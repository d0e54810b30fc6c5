use ratatui::style::Color;
use std::str::FromStr;

/// A named palette with the seven color roles used by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub base: Color,
    pub highlight: Color,
    pub text: Color,
    pub comment: Color,
    pub special: Color,
    pub error: Color,
    pub accent: Color,
}

impl Theme {
    /// Fallback palette used when no theme source yields anything
    pub fn builtin_default() -> Self {
        Self {
            name: "Gruvbox (Built-in)".to_string(),
            base: Color::Rgb(0x28, 0x28, 0x28),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            text: Color::Rgb(0xeb, 0xdb, 0xb2),
            comment: Color::Rgb(0x92, 0x83, 0x74),
            special: Color::Rgb(0xb8, 0xbb, 0x26),
            error: Color::Rgb(0xfb, 0x49, 0x34),
            accent: Color::Rgb(0x83, 0xa5, 0x98),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin_default()
    }
}

/// Parse `#rrggbb` or a color name; anything else becomes the terminal default
pub fn parse_color(value: &str) -> Color {
    Color::from_str(value.trim()).unwrap_or(Color::Reset)
}
