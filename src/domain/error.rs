use thiserror::Error;

/// Reasons a tree edit could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no task is selected")]
    NoSelection,
    #[error("index {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the trash is empty")]
    EmptyTrash,
    #[error("no title is being edited")]
    NotEditing,
}
