use crate::domain::{
    clamp_cursor, project, EditError, EditKind, ItemStore, TaskNode, TextBuffer, Theme, UiMode,
    View, VisibleItem,
};
use crate::persistence::{
    absolute_path, atomic_write, load_preferences, load_themes, parse_todo_file, read_file, save_preferences,
    serialize_todo_file, ConfigLocations, Preferences,
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Title input session for a node in the active list
#[derive(Debug, Clone)]
pub struct TitleEditor {
    /// Index into `store.items` of the node being titled
    pub target: usize,
    pub kind: EditKind,
    pub buffer: TextBuffer,
}

/// Main application state
pub struct AppState {
    pub store: ItemStore,
    pub visible: Vec<VisibleItem>,
    pub view: View,
    pub editor: Option<TitleEditor>,

    pub cursor_main: usize,
    pub cursor_trash: usize,
    pub cursor_theme: usize,

    // First visual line on screen, kept between frames by the list panes
    pub main_offset: usize,
    pub trash_offset: usize,

    pub themes: Vec<Theme>,
    pub active_theme: Theme,

    pub todo_path: PathBuf,
    /// Absolute task-file path shown in the header, resolved once at startup
    pub display_path: String,
    pub locations: ConfigLocations,

    /// Last persistence failure, shown in the footer until a save succeeds
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(
        store: ItemStore,
        todo_path: PathBuf,
        themes: Vec<Theme>,
        preferences: &Preferences,
        locations: ConfigLocations,
    ) -> Self {
        let themes = if themes.is_empty() {
            vec![Theme::builtin_default()]
        } else {
            themes
        };

        let cursor_theme = themes
            .iter()
            .position(|t| t.name == preferences.selected_theme)
            .unwrap_or(0);
        let active_theme = themes[cursor_theme].clone();

        let mut app = Self {
            store,
            visible: Vec::new(),
            view: View::Main,
            editor: None,
            cursor_main: 0,
            cursor_trash: 0,
            cursor_theme,
            main_offset: 0,
            trash_offset: 0,
            themes,
            active_theme,
            display_path: absolute_path(&todo_path).display().to_string(),
            todo_path,
            locations,
            status_message: None,
        };
        app.reproject();
        app
    }

    /// Load the task file, themes and preferences. A missing task file is an empty list.
    pub fn load(todo_path: PathBuf, locations: ConfigLocations) -> Result<Self> {
        let store = load_store(&todo_path)?;
        let themes = load_themes(&locations);
        let preferences = load_preferences(&locations);
        info!(
            path = %todo_path.display(),
            items = store.items.len(),
            trash = store.trash.len(),
            themes = themes.len(),
            "loaded task file"
        );
        Ok(Self::new(store, todo_path, themes, &preferences, locations))
    }

    /// Current input dispatch state
    pub fn ui_mode(&self) -> UiMode {
        if self.editor.is_some() {
            return UiMode::TextInput;
        }
        match self.view {
            View::Main => UiMode::MainView,
            View::Trash => UiMode::TrashView,
            View::ThemeSelector => UiMode::ThemeView,
        }
    }

    /// Recompute the visible rows and clamp the main cursor
    pub fn reproject(&mut self) {
        self.visible = project(&self.store.items);
        self.cursor_main = clamp_cursor(self.cursor_main, self.visible.len());
    }

    /// Rewrite the whole task file. Failures are logged and kept as a status
    /// message; the in-memory state stays authoritative.
    pub fn persist(&mut self) {
        let content = serialize_todo_file(&self.store.items, &self.store.trash);
        match atomic_write(&self.todo_path, &content) {
            Ok(()) => {
                debug!(path = %self.todo_path.display(), "saved task file");
                self.status_message = None;
            }
            Err(e) => {
                warn!("failed to save {}: {:#}", self.todo_path.display(), e);
                self.status_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    /// Map the main cursor to an index into the active list
    pub fn selected_real_index(&self) -> Result<usize, EditError> {
        self.visible
            .get(self.cursor_main)
            .map(|row| row.source_index)
            .ok_or(EditError::NoSelection)
    }

    fn visible_position(&self, real_index: usize) -> Option<usize> {
        self.visible
            .iter()
            .position(|row| row.source_index == real_index)
    }

    /// Move the cursor of the current view up
    pub fn move_up(&mut self) {
        let cursor = match self.view {
            View::Main => &mut self.cursor_main,
            View::Trash => &mut self.cursor_trash,
            View::ThemeSelector => &mut self.cursor_theme,
        };
        *cursor = cursor.saturating_sub(1);
    }

    /// Move the cursor of the current view down
    pub fn move_down(&mut self) {
        let (cursor, len) = match self.view {
            View::Main => (&mut self.cursor_main, self.visible.len()),
            View::Trash => (&mut self.cursor_trash, self.store.trash.len()),
            View::ThemeSelector => (&mut self.cursor_theme, self.themes.len()),
        };
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    // ----- tree edits -----

    /// Append an untitled root node at the very end and start titling it
    pub fn insert_root_sibling(&mut self) {
        let target = self.store.push(TaskNode::blank(0));
        self.reproject();
        self.cursor_main = self
            .visible_position(target)
            .unwrap_or(self.visible.len().saturating_sub(1));
        self.start_editor(target, EditKind::NewRoot);
    }

    /// Insert an untitled child right after the selected node and start titling it
    pub fn insert_child(&mut self) -> Result<(), EditError> {
        let parent = self.selected_real_index()?;
        let level = {
            let node = self.store.get_mut(parent)?;
            node.collapsed = false;
            node.level + 1
        };

        let target = parent + 1;
        self.store.insert(target, TaskNode::blank(level))?;
        self.reproject();
        if let Some(pos) = self.visible_position(target) {
            self.cursor_main = pos;
        }
        self.start_editor(target, EditKind::NewChild);
        Ok(())
    }

    pub fn toggle_done(&mut self) -> Result<(), EditError> {
        let idx = self.selected_real_index()?;
        self.store.get_mut(idx)?.toggle_done();
        self.reproject();
        self.persist();
        Ok(())
    }

    /// Flip the collapse flag. Nodes without children are left alone;
    /// returns whether anything changed.
    pub fn toggle_collapse(&mut self) -> Result<bool, EditError> {
        let idx = self.selected_real_index()?;
        if !self.store.has_children(idx) {
            return Ok(false);
        }
        let node = self.store.get_mut(idx)?;
        node.collapsed = !node.collapsed;
        self.reproject();
        self.persist();
        Ok(true)
    }

    /// Start editing the selected node's title, pre-filled
    pub fn start_edit_title(&mut self) -> Result<(), EditError> {
        let idx = self.selected_real_index()?;
        self.store.get(idx)?;
        self.start_editor(idx, EditKind::Rename);
        Ok(())
    }

    /// Toggle between level 0 and level 1. Descendant levels are not touched.
    pub fn toggle_indent(&mut self) -> Result<(), EditError> {
        let idx = self.selected_real_index()?;
        self.store.get_mut(idx)?.toggle_indent();
        self.reproject();
        self.persist();
        Ok(())
    }

    /// Move the selected node and its whole subtree to the trash
    pub fn delete_subtree(&mut self) -> Result<usize, EditError> {
        let idx = self.selected_real_index()?;
        let moved = self.store.trash_subtree(idx)?;
        info!(index = idx, count = moved, "moved subtree to trash");
        self.reproject();
        self.persist();
        Ok(moved)
    }

    /// Move the trash entry under the cursor to the end of the active list
    pub fn restore_from_trash(&mut self) -> Result<(), EditError> {
        let restored = self.store.restore(self.cursor_trash)?;
        debug!(trash_index = self.cursor_trash, index = restored, "restored entry");
        self.cursor_trash = clamp_cursor(self.cursor_trash, self.store.trash.len());
        self.reproject();
        self.persist();
        Ok(())
    }

    /// Drop the trash entry under the cursor for good
    pub fn purge_from_trash(&mut self) -> Result<(), EditError> {
        let purged = self.store.purge(self.cursor_trash)?;
        debug!(title = %purged.title, "purged trash entry");
        self.cursor_trash = clamp_cursor(self.cursor_trash, self.store.trash.len());
        self.persist();
        Ok(())
    }

    // ----- title input -----

    fn start_editor(&mut self, target: usize, kind: EditKind) {
        let buffer = match kind {
            EditKind::Rename => self
                .store
                .items
                .get(target)
                .map(|node| TextBuffer::new(node.title.clone()))
                .unwrap_or_default(),
            EditKind::NewRoot | EditKind::NewChild => TextBuffer::default(),
        };
        self.editor = Some(TitleEditor {
            target,
            kind,
            buffer,
        });
    }

    pub fn editor_buffer_mut(&mut self) -> Result<&mut TextBuffer, EditError> {
        self.editor
            .as_mut()
            .map(|editor| &mut editor.buffer)
            .ok_or(EditError::NotEditing)
    }

    /// Write the buffer into the target title. An empty buffer on a fresh
    /// node is treated as a cancel, which removes the node.
    pub fn confirm_input(&mut self) -> Result<(), EditError> {
        let editor = self.editor.take().ok_or(EditError::NotEditing)?;
        if editor.buffer.is_empty() && editor.kind.is_new_node() {
            self.discard_new_node(editor.target);
            return Ok(());
        }

        let title = editor.buffer.into_string();
        self.store.get_mut(editor.target)?.title = title;
        self.reproject();
        self.persist();
        Ok(())
    }

    /// Leave text input. Fresh nodes are removed; renames keep the old title.
    pub fn cancel_input(&mut self) -> Result<(), EditError> {
        let editor = self.editor.take().ok_or(EditError::NotEditing)?;
        if editor.kind.is_new_node() {
            self.discard_new_node(editor.target);
        }
        Ok(())
    }

    fn discard_new_node(&mut self, target: usize) {
        if self.store.remove(target).is_ok() {
            self.cursor_main = self.cursor_main.saturating_sub(1);
        }
        self.reproject();
    }

    // ----- views -----

    pub fn open_trash(&mut self) {
        self.view = View::Trash;
        self.cursor_trash = 0;
        self.trash_offset = 0;
    }

    pub fn open_theme_selector(&mut self) {
        self.view = View::ThemeSelector;
        self.cursor_theme = self
            .themes
            .iter()
            .position(|t| t.name == self.active_theme.name)
            .unwrap_or(0);
    }

    pub fn back_to_main(&mut self) {
        self.view = View::Main;
    }

    /// Activate the highlighted theme and remember it
    pub fn apply_theme(&mut self) {
        if let Some(theme) = self.themes.get(self.cursor_theme) {
            self.active_theme = theme.clone();
            let prefs = Preferences {
                selected_theme: theme.name.clone(),
            };
            match save_preferences(&self.locations, &prefs) {
                Ok(path) => {
                    debug!(path = %path.display(), theme = %prefs.selected_theme, "saved preferences");
                    self.status_message = None;
                }
                Err(e) => {
                    warn!("failed to save preferences: {:#}", e);
                    self.status_message = Some(format!("Could not save theme: {}", e));
                }
            }
        }
        self.view = View::Main;
    }
}

/// Read and parse the task file; missing means empty
pub fn load_store(path: &Path) -> Result<ItemStore> {
    let content = read_file(path)?;
    let (items, trash) = parse_todo_file(&content);
    Ok(ItemStore::new(items, trash))
}
