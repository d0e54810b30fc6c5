use crate::domain::Theme;
use ratatui::style::{Modifier, Style};

/// Header bar: base text on the highlight color
pub fn header_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.base)
        .bg(theme.highlight)
        .add_modifier(Modifier::BOLD)
}

/// Regular task title
pub fn text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text)
}

/// Checked-off or trashed title
pub fn struck_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.comment)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Tree guides, hints and other secondary text
pub fn dim_style(theme: &Theme) -> Style {
    Style::default().fg(theme.comment)
}

/// Cursor marker in the active list
pub fn cursor_style(theme: &Theme) -> Style {
    Style::default().fg(theme.highlight)
}

pub fn done_marker_style(theme: &Theme) -> Style {
    Style::default().fg(theme.special)
}

pub fn collapsed_marker_style(theme: &Theme) -> Style {
    Style::default().fg(theme.accent)
}

/// Title text while it is being typed
pub fn editing_style(theme: &Theme) -> Style {
    Style::default().fg(theme.base).bg(theme.highlight)
}

/// Trash markers, trash border, error messages
pub fn error_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error)
}

pub fn border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.highlight)
}

/// Highlighted row in the theme selector
pub fn selected_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD)
}
