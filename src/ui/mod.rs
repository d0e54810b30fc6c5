pub mod header;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod theme_pane;
pub mod trash_pane;
pub mod viewport;

use crate::app::AppState;
use crate::domain::View;
use header::render_header;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{style::Style, widgets::Block, Frame};
use theme_pane::render_theme_pane;
use trash_pane::render_trash_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    f.render_widget(
        Block::default().style(Style::default().bg(app.active_theme.base)),
        size,
    );

    render_header(f, app, layout.header_area);

    match app.view {
        View::Main => render_list_pane(f, app, layout.content_area),
        View::Trash => render_trash_pane(f, app, layout.content_area),
        View::ThemeSelector => render_theme_pane(f, app, layout.content_area),
    }

    render_keybindings(f, app, layout.footer_area);
}
