/// Which list the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main,
    Trash,
    ThemeSelector,
}

impl View {
    /// Label shown in the header bar
    pub fn label(&self) -> &'static str {
        match self {
            View::Main => "TODO",
            View::Trash => "BIN",
            View::ThemeSelector => "THEMES",
        }
    }
}

/// Input dispatch state. `TextInput` is modal and sits on top of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    MainView,
    TrashView,
    ThemeView,
    TextInput,
}

/// What a title edit session was started for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A fresh root node appended at the end
    NewRoot,
    /// A fresh child inserted under the cursor
    NewChild,
    /// Renaming an existing node
    Rename,
}

impl EditKind {
    pub fn is_new_node(&self) -> bool {
        !matches!(self, EditKind::Rename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_labels() {
        assert_eq!(View::Main.label(), "TODO");
        assert_eq!(View::Trash.label(), "BIN");
        assert_eq!(View::ThemeSelector.label(), "THEMES");
    }

    #[test]
    fn test_edit_kind_is_new_node() {
        assert!(EditKind::NewRoot.is_new_node());
        assert!(EditKind::NewChild.is_new_node());
        assert!(!EditKind::Rename.is_new_node());
    }
}
