use crate::app::AppState;
use crate::domain::{EditError, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Handle a key press. Returns `true` when the application should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode() {
        UiMode::TextInput => handle_text_input(app, key),
        UiMode::MainView => handle_main_view(app, key),
        UiMode::TrashView => handle_trash_view(app, key),
        UiMode::ThemeView => handle_theme_view(app, key),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Edits that hit nothing (empty list, empty trash) are no-ops for the user
fn no_op_on_error<T>(result: Result<T, EditError>) {
    if let Err(e) = result {
        debug!("ignored key: {}", e);
    }
}

fn handle_main_view(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if is_ctrl_c(&key) {
        return Ok(true);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),

        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),

        KeyCode::Char(' ') => no_op_on_error(app.toggle_done()),
        KeyCode::Char('v') => no_op_on_error(app.toggle_collapse()),
        KeyCode::Char('n') => app.insert_root_sibling(),
        KeyCode::Char('m') => no_op_on_error(app.insert_child()),
        KeyCode::Char('e') => no_op_on_error(app.start_edit_title()),
        KeyCode::Char('d') => no_op_on_error(app.delete_subtree()),
        KeyCode::Tab => no_op_on_error(app.toggle_indent()),

        KeyCode::Char('t') => app.open_theme_selector(),
        KeyCode::Char('B') => app.open_trash(),

        _ => {}
    }
    Ok(false)
}

fn handle_trash_view(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if is_ctrl_c(&key) {
        app.back_to_main();
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('B') | KeyCode::Char('q') => app.back_to_main(),

        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),

        KeyCode::Enter => no_op_on_error(app.restore_from_trash()),
        KeyCode::Char('x') => no_op_on_error(app.purge_from_trash()),

        _ => {}
    }
    Ok(false)
}

fn handle_theme_view(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if is_ctrl_c(&key) {
        app.back_to_main();
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.back_to_main(),

        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),

        KeyCode::Enter => app.apply_theme(),

        _ => {}
    }
    Ok(false)
}

/// Modal title input: only buffer editing, confirm and cancel are live
fn handle_text_input(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => no_op_on_error(app.confirm_input()),
        KeyCode::Esc => no_op_on_error(app.cancel_input()),

        KeyCode::Left => no_op_on_error(app.editor_buffer_mut().map(|b| b.move_left())),
        KeyCode::Right => no_op_on_error(app.editor_buffer_mut().map(|b| b.move_right())),
        KeyCode::Home => no_op_on_error(app.editor_buffer_mut().map(|b| b.move_home())),
        KeyCode::End => no_op_on_error(app.editor_buffer_mut().map(|b| b.move_end())),
        KeyCode::Backspace => no_op_on_error(app.editor_buffer_mut().map(|b| b.backspace())),
        KeyCode::Delete => no_op_on_error(app.editor_buffer_mut().map(|b| b.delete())),

        // Ctrl combinations are not text
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            no_op_on_error(app.editor_buffer_mut().map(|b| b.insert(c)))
        }

        _ => {}
    }
    Ok(false)
}
