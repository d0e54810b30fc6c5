pub mod enums;
pub mod error;
pub mod input;
pub mod item;
pub mod store;
pub mod theme;
pub mod views;

pub use enums::{EditKind, UiMode, View};
pub use error::EditError;
pub use input::TextBuffer;
pub use item::{TaskNode, TaskStatus, MAX_LEVEL};
pub use store::ItemStore;
pub use theme::{parse_color, Theme};
pub use views::{clamp_cursor, project, tree_guide, TreeGuide, VisibleItem};
