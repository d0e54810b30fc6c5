use crate::app::AppState;
use crate::domain::{tree_guide, TaskNode, TextBuffer, Theme, TreeGuide};
use crate::ui::styles::{
    border_style, collapsed_marker_style, cursor_style, dim_style, done_marker_style,
    editing_style, struck_style, text_style,
};
use crate::ui::viewport::{display_width, scroll_to, wrap_ranges, RowLines};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub(crate) const CURSOR_MARK: &str = "➤ ";
pub(crate) const NO_CURSOR: &str = "  ";
const EDIT_CURSOR: &str = "█";

/// Checkbox for an active task: collapsed wins over done
pub fn checkbox(node: &TaskNode) -> &'static str {
    if node.collapsed {
        "[+]"
    } else if node.done {
        "[✔]"
    } else {
        "[ ]"
    }
}

/// Narrowest title column; rows overflow the pane rather than wrap tighter
const MIN_TITLE_WIDTH: usize = 10;

/// Glyphs left of a title: the cursor mark, tree guides and a status marker.
/// Shared by the active list and the trash.
pub(crate) struct RowPrefix<'a> {
    pub guide: &'a TreeGuide,
    pub is_cursor: bool,
    pub cursor_style: Style,
    pub marker: Span<'static>,
    /// A visible child follows, so a `│` runs down under the marker
    pub open_children: bool,
}

impl RowPrefix<'_> {
    fn mark(&self) -> Span<'static> {
        let mark = if self.is_cursor { CURSOR_MARK } else { NO_CURSOR };
        Span::styled(mark, self.cursor_style)
    }

    fn first_line(&self, theme: &Theme) -> Vec<Span<'static>> {
        vec![
            self.mark(),
            Span::styled(self.guide.prefix.clone(), dim_style(theme)),
            Span::styled(self.guide.connector, dim_style(theme)),
            self.marker.clone(),
            Span::raw(" "),
        ]
    }

    fn continuation_line(&self, theme: &Theme) -> Vec<Span<'static>> {
        let under_marker = if self.open_children { " │ " } else { "   " };
        vec![
            self.mark(),
            Span::styled(self.guide.prefix.clone(), dim_style(theme)),
            Span::styled(self.guide.continuation(), dim_style(theme)),
            Span::styled(under_marker, dim_style(theme)),
            Span::raw(" "),
        ]
    }

    /// Cells available for the title in a pane `pane_width` cells wide
    pub fn title_width(&self, pane_width: usize) -> usize {
        let used = display_width(CURSOR_MARK)
            + display_width(&self.guide.prefix)
            + display_width(self.guide.connector)
            + display_width(&self.marker.content)
            + 1;
        pane_width.saturating_sub(used).max(MIN_TITLE_WIDTH)
    }

    /// Lay out `title` under this prefix, wrapping it to the pane width.
    /// `cursor` is the char index drawn as a block cursor, if any.
    pub fn lines(
        &self,
        title: &str,
        title_style: Style,
        cursor: Option<usize>,
        pane_width: usize,
        theme: &Theme,
    ) -> Vec<Line<'static>> {
        let chars: Vec<char> = title.chars().collect();
        wrap_ranges(title, self.title_width(pane_width))
            .into_iter()
            .enumerate()
            .map(|(row, range)| {
                let mut spans = if row == 0 {
                    self.first_line(theme)
                } else {
                    self.continuation_line(theme)
                };
                let chunk: String = chars[range.clone()].iter().collect();
                let chunk = chunk.trim_end();
                let at = cursor
                    .filter(|c| range.contains(c))
                    .map(|c| c - range.start)
                    .filter(|&c| c < chunk.chars().count());
                match at {
                    Some(at) => {
                        let before: String = chunk.chars().take(at).collect();
                        let after: String = chunk.chars().skip(at + 1).collect();
                        spans.push(Span::styled(before, title_style));
                        spans.push(Span::styled(EDIT_CURSOR, cursor_style(theme)));
                        spans.push(Span::styled(after, title_style));
                    }
                    None => spans.push(Span::styled(chunk.to_string(), title_style)),
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Build the visual lines of one node in the active list
pub fn task_lines(
    node: &TaskNode,
    guide: &TreeGuide,
    is_cursor: bool,
    editing: Option<&TextBuffer>,
    open_children: bool,
    pane_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let marker_style = if node.collapsed {
        collapsed_marker_style(theme)
    } else if node.done {
        done_marker_style(theme)
    } else {
        text_style(theme)
    };
    let prefix = RowPrefix {
        guide,
        is_cursor,
        cursor_style: cursor_style(theme),
        marker: Span::styled(checkbox(node), marker_style),
        open_children,
    };

    match editing {
        Some(buffer) => {
            let (before, after) = buffer.split_at_cursor();
            let text = format!("{}{}{}", before, EDIT_CURSOR, after);
            prefix.lines(&text, editing_style(theme), Some(buffer.cursor()), pane_width, theme)
        }
        None => {
            let title_style = if node.done {
                struck_style(theme)
            } else {
                text_style(theme)
            };
            prefix.lines(&node.title, title_style, None, pane_width, theme)
        }
    }
}

/// Whether row `i` is followed by a deeper row
pub(crate) fn has_open_children(levels: &[usize], i: usize) -> bool {
    levels.get(i + 1).map_or(false, |&next| next > levels[i])
}

/// Render the active task list
pub fn render_list_pane(f: &mut Frame, app: &mut AppState, area: Rect) {
    let theme = &app.active_theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(theme));
    let inner = block.inner(area);

    let levels: Vec<usize> = app.visible.iter().map(|row| row.snapshot.level).collect();
    let mut rows = RowLines::default();
    for (i, row) in app.visible.iter().enumerate() {
        let node = app.store.items.get(row.source_index).unwrap_or(&row.snapshot);
        let editing = app
            .editor
            .as_ref()
            .filter(|editor| editor.target == row.source_index)
            .map(|editor| &editor.buffer);
        let guide = tree_guide(&levels, i);
        let is_cursor = i == app.cursor_main;
        let lines = task_lines(
            node,
            &guide,
            is_cursor,
            editing,
            has_open_children(&levels, i),
            inner.width as usize,
            theme,
        );
        rows.push_row(lines, is_cursor);
    }

    let height = inner.height as usize;
    app.main_offset = scroll_to(app.main_offset, &rows.selected, rows.lines.len(), height);
    let marker = dim_style(theme).add_modifier(Modifier::BOLD);
    let shown = rows.window(app.main_offset, height, marker);

    f.render_widget(Paragraph::new(shown).block(block), area);
}
