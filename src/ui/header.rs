use crate::app::AppState;
use crate::ui::styles::header_style;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Shorten `path` from the left with `...` so it fits in `available` columns
pub fn truncate_path(path: &str, available: usize) -> String {
    let len = path.chars().count();
    if available <= 3 || len <= available {
        return path.to_string();
    }
    let keep = available - 3;
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{}", tail)
}

/// Render the centered `// MODE /path/to/todo.md` header
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let prefix = format!("// {} ", app.view.label());
    // One column of padding on each side of the label
    let available = (area.width as usize).saturating_sub(prefix.chars().count() + 2);
    let path = truncate_path(&app.display_path, available);

    let label = format!(" {}{} ", prefix, path);
    let header = Paragraph::new(Line::from(Span::styled(label, header_style(&app.active_theme))))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}
