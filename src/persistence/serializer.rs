use crate::domain::{TaskNode, TaskStatus};

/// Serialize active items followed by trash entries into the task file format
pub fn serialize_todo_file(items: &[TaskNode], trash: &[TaskNode]) -> String {
    let mut output = String::new();

    for item in items {
        let status = if item.done {
            TaskStatus::Done
        } else {
            TaskStatus::Open
        };
        push_line(&mut output, item, status);
    }

    for item in trash {
        push_line(&mut output, item, TaskStatus::Trashed);
    }

    output
}

fn push_line(output: &mut String, item: &TaskNode, status: TaskStatus) {
    output.push_str(&"  ".repeat(item.level));
    output.push_str(&format!("- [{}] {}\n", status.to_marker(), item.title));
}
