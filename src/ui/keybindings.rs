use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{dim_style, error_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for the current input state
pub fn hints(mode: UiMode) -> &'static str {
    match mode {
        UiMode::MainView => {
            "New(n) • Subtask(m) • Edit(e) • Done(space) • Fold(v) • Indent(tab) • Del(d) • Bin(Shift+B) • Theme(t) • Quit(q)"
        }
        UiMode::TrashView => "Restore(Enter) • Purge(x) • Back(Esc)",
        UiMode::ThemeView => "Select(Enter) • Back(Esc)",
        UiMode::TextInput => "Enter to Confirm • Esc to Cancel",
    }
}

/// Render the footer: a pending save error takes the place of the hints
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = &app.active_theme;
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(message.clone(), error_style(theme))),
        None => Line::from(Span::styled(hints(app.ui_mode()), dim_style(theme))),
    };

    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_per_mode() {
        assert!(hints(UiMode::MainView).contains("Bin(Shift+B)"));
        assert!(hints(UiMode::TrashView).contains("Purge(x)"));
        assert!(hints(UiMode::ThemeView).starts_with("Select"));
        assert_eq!(hints(UiMode::TextInput), "Enter to Confirm • Esc to Cancel");
    }
}
