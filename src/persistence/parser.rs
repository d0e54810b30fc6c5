use crate::domain::{TaskNode, TaskStatus, MAX_LEVEL};

/// Parse a task file into `(items, trash)`.
///
/// Lines that do not start with `- [` once trimmed are ignored, as are
/// task-looking lines with no closing bracket. Trash entries are recognised
/// purely by their `D` marker.
pub fn parse_todo_file(content: &str) -> (Vec<TaskNode>, Vec<TaskNode>) {
    let mut items = Vec::new();
    let mut trash = Vec::new();

    for line in content.lines() {
        if let Some((status, node)) = parse_task_line(line) {
            match status {
                TaskStatus::Trashed => trash.push(node),
                TaskStatus::Done | TaskStatus::Open => items.push(node),
            }
        }
    }

    (items, trash)
}

/// Parse one `<indent>- [<c>] <title>` line
fn parse_task_line(line: &str) -> Option<(TaskStatus, TaskNode)> {
    let trimmed = line.trim();
    let rest = trimmed.strip_prefix("- [")?;

    // Title is everything after the first closing bracket
    let close = rest.find(']')?;
    let marker = rest[..close].chars().next().unwrap_or(' ');
    let status = TaskStatus::from_marker(marker);
    let title = rest[close + 1..].trim().to_string();

    let leading_spaces = line.chars().take_while(|c| *c == ' ').count();
    let level = (leading_spaces / 2).min(MAX_LEVEL);

    let node = TaskNode::new(title, level).with_done(status == TaskStatus::Done);
    Some((status, node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triples(nodes: &[TaskNode]) -> Vec<(&str, bool, usize)> {
        nodes
            .iter()
            .map(|n| (n.title.as_str(), n.done, n.level))
            .collect()
    }

    #[test]
    fn test_parse_nested_items() {
        let content = "- [ ] Buy milk\n  - [x] 2%\n    - [ ] organic\n- [ ] Call mom\n";
        let (items, trash) = parse_todo_file(content);

        assert_eq!(
            triples(&items),
            vec![
                ("Buy milk", false, 0),
                ("2%", true, 1),
                ("organic", false, 2),
                ("Call mom", false, 0),
            ]
        );
        assert!(trash.is_empty());
    }

    #[test]
    fn test_parse_trash_entries() {
        let content = "- [ ] Keep\n- [D] Gone\n  - [D] Gone child\n";
        let (items, trash) = parse_todo_file(content);

        assert_eq!(triples(&items), vec![("Keep", false, 0)]);
        assert_eq!(
            triples(&trash),
            vec![("Gone", false, 0), ("Gone child", false, 1)]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let content = "# Heading\n\nsome prose\n- [ no bracket\n* [ ] bullet\n- [x] real\n";
        let (items, trash) = parse_todo_file(content);

        assert_eq!(triples(&items), vec![("real", true, 0)]);
        assert!(trash.is_empty());
    }

    #[test]
    fn test_parse_odd_indent_rounds_down() {
        let content = "   - [ ] three spaces\n     - [ ] five spaces\n";
        let (items, _) = parse_todo_file(content);

        assert_eq!(items[0].level, 1);
        assert_eq!(items[1].level, 2);
    }

    #[test]
    fn test_parse_clamps_deep_levels() {
        let line = format!("{}- [ ] deep\n", " ".repeat(400));
        let (items, _) = parse_todo_file(&line);
        assert_eq!(items[0].level, MAX_LEVEL);
    }

    #[test]
    fn test_parse_title_keeps_later_brackets() {
        let (items, _) = parse_todo_file("- [ ] fix [parser] bug\n");
        assert_eq!(items[0].title, "fix [parser] bug");
    }

    #[test]
    fn test_parse_empty_brackets_and_title() {
        let (items, _) = parse_todo_file("- [] \n- [x]\n");
        assert_eq!(triples(&items), vec![("", false, 0), ("", true, 0)]);
    }

    #[test]
    fn test_parse_uppercase_x_is_not_done() {
        let (items, trash) = parse_todo_file("- [X] shouting\n- [x] done\n");
        assert_eq!(triples(&items), vec![("shouting", false, 0), ("done", true, 0)]);
        assert!(trash.is_empty());
    }

    #[test]
    fn test_parse_loads_expanded() {
        let (items, _) = parse_todo_file("- [ ] a\n  - [ ] b\n");
        assert!(items.iter().all(|n| !n.collapsed));
    }

    #[test]
    fn test_parse_empty_content() {
        let (items, trash) = parse_todo_file("");
        assert!(items.is_empty());
        assert!(trash.is_empty());
    }
}
