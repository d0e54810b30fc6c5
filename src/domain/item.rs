/// Deepest nesting level accepted when loading a task file
pub const MAX_LEVEL: usize = 64;

/// A single task in the flattened forest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskNode {
    /// Task title
    pub title: String,
    /// Whether the task is checked off
    pub done: bool,
    /// Zero-based nesting depth
    pub level: usize,
    /// Whether descendants are hidden from the visible projection
    pub collapsed: bool,
}

impl TaskNode {
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        Self {
            title: title.into(),
            done: false,
            level,
            collapsed: false,
        }
    }

    /// Builder-style helper for marking a node done
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// An empty, not-done node used as the placeholder for a pending title
    pub fn blank(level: usize) -> Self {
        Self::new(String::new(), level)
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Binary indent: level 0 becomes 1, anything deeper goes back to 0
    pub fn toggle_indent(&mut self) {
        self.level = if self.level == 0 { 1 } else { 0 };
    }
}

/// Status marker written between the brackets of a task line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Open,
    Done,
    Trashed,
}

impl TaskStatus {
    /// Parse the status char. Unknown markers read as open tasks.
    pub fn from_marker(c: char) -> Self {
        match c {
            'x' => Self::Done,
            'D' => Self::Trashed,
            _ => Self::Open,
        }
    }

    pub fn to_marker(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Done => 'x',
            Self::Trashed => 'D',
        }
    }
}
