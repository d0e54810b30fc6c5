use crate::app::AppState;
use crate::domain::Theme;
use crate::ui::styles::{border_style, cursor_style, selected_style, text_style};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// One selector row: cursor, name, and three swatches of the candidate theme
fn theme_line(candidate: &Theme, is_cursor: bool, active: &Theme) -> Line<'static> {
    let (mark, name_style) = if is_cursor {
        ("-> ", selected_style(active))
    } else {
        ("   ", text_style(active))
    };

    Line::from(vec![
        Span::styled(mark, cursor_style(active)),
        Span::styled(candidate.name.clone(), name_style),
        Span::raw("  "),
        Span::styled("■", Style::default().fg(candidate.base)),
        Span::raw(" "),
        Span::styled("■", Style::default().fg(candidate.highlight)),
        Span::raw(" "),
        Span::styled("■", Style::default().fg(candidate.special)),
    ])
}

/// Render the theme selector
pub fn render_theme_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let active = &app.active_theme;
    let items: Vec<ListItem> = app
        .themes
        .iter()
        .enumerate()
        .map(|(i, theme)| ListItem::new(theme_line(theme, i == app.cursor_theme, active)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(active)),
    );

    let mut state = ListState::default().with_selected(Some(app.cursor_theme));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_line_marks_cursor() {
        let theme = Theme::default();
        let line = theme_line(&theme, true, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "-> Gruvbox (Built-in)  ■ ■ ■");
    }
}
