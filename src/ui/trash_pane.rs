use crate::app::AppState;
use crate::domain::{tree_guide, TaskNode, Theme, TreeGuide};
use crate::ui::list_pane::{has_open_children, RowPrefix};
use crate::ui::styles::{dim_style, error_style, struck_style};
use crate::ui::viewport::{scroll_to, RowLines};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Build the visual lines of one trash entry
pub fn trash_lines(
    node: &TaskNode,
    guide: &TreeGuide,
    is_cursor: bool,
    open_children: bool,
    pane_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let prefix = RowPrefix {
        guide,
        is_cursor,
        cursor_style: error_style(theme),
        marker: Span::styled("[D]", error_style(theme)),
        open_children,
    };
    prefix.lines(&node.title, struck_style(theme), None, pane_width, theme)
}

/// Render the trash bin
pub fn render_trash_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let theme = &app.active_theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(error_style(theme));

    if app.store.trash.is_empty() {
        let empty = Paragraph::new(Span::styled("  (Bin is empty)", dim_style(theme))).block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    let levels: Vec<usize> = app.store.trash.iter().map(|node| node.level).collect();
    let mut rows = RowLines::default();
    for (i, node) in app.store.trash.iter().enumerate() {
        let guide = tree_guide(&levels, i);
        let is_cursor = i == app.cursor_trash;
        let lines = trash_lines(
            node,
            &guide,
            is_cursor,
            has_open_children(&levels, i),
            inner.width as usize,
            theme,
        );
        rows.push_row(lines, is_cursor);
    }

    let height = inner.height as usize;
    app.trash_offset = scroll_to(app.trash_offset, &rows.selected, rows.lines.len(), height);
    let marker = error_style(theme).add_modifier(Modifier::BOLD);
    let shown = rows.window(app.trash_offset, height, marker);

    f.render_widget(Paragraph::new(shown).block(block), area);
}
