use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

pub const SCROLL_UP_MARK: &str = "↑ ... ↑";
pub const SCROLL_DOWN_MARK: &str = "↓ ... ↓";

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Split `text` into rows of at most `width` cells, returned as char ranges.
///
/// Breaks after the last whitespace that fits; a word wider than a row is
/// cut. Ranges cover every char, so whitespace at a break stays at the end
/// of its row.
pub fn wrap_ranges(text: &str, width: usize) -> Vec<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    if width == 0 {
        return vec![0..total];
    }

    let mut rows = Vec::new();
    let mut start = 0;
    loop {
        let mut used = 0;
        let mut end = start;
        while end < total && used + char_width(chars[end]) <= width {
            used += char_width(chars[end]);
            end += 1;
        }
        if end == total {
            rows.push(start..total);
            break;
        }

        let cut = if chars[end].is_whitespace() {
            end + 1
        } else {
            (start + 1..end)
                .rev()
                .find(|&i| chars[i - 1].is_whitespace())
                .unwrap_or_else(|| end.max(start + 1))
        };
        rows.push(start..cut);
        if cut == total {
            break;
        }
        start = cut;
    }
    rows
}

/// Every visual line of a list plus the lines taken by the selected row
#[derive(Debug, Default)]
pub struct RowLines {
    pub lines: Vec<Line<'static>>,
    pub selected: Range<usize>,
}

impl RowLines {
    pub fn push_row(&mut self, row: Vec<Line<'static>>, is_selected: bool) {
        let start = self.lines.len();
        self.lines.extend(row);
        if is_selected {
            self.selected = start..self.lines.len();
        }
    }

    /// Lines on screen for a pane `height` rows tall, starting at `offset`.
    /// The first and last line are replaced with scroll markers when more
    /// content lies beyond them.
    pub fn window(mut self, offset: usize, height: usize, marker: Style) -> Vec<Line<'static>> {
        let total = self.lines.len();
        let end = (offset + height).min(total);
        let mut shown: Vec<Line<'static>> = self.lines.drain(offset.min(end)..end).collect();

        if offset > 0 {
            if let Some(first) = shown.first_mut() {
                *first = marker_line(SCROLL_UP_MARK, marker);
            }
        }
        if end < total {
            if let Some(last) = shown.last_mut() {
                *last = marker_line(SCROLL_DOWN_MARK, marker);
            }
        }
        shown
    }
}

fn marker_line(mark: &'static str, style: Style) -> Line<'static> {
    Line::from(Span::styled(mark, style)).alignment(Alignment::Center)
}

/// Adjust `offset` so the `selected` lines are on screen without leaving
/// blank rows below the content
pub fn scroll_to(offset: usize, selected: &Range<usize>, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    let mut offset = offset;
    if selected.start < offset {
        offset = selected.start;
    }
    if selected.end > offset + height {
        offset = selected.end - height;
    }
    offset.min(total - height)
}
