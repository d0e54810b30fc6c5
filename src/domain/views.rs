use super::item::TaskNode;

/// A row of the visible projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
    /// Index into the active item list
    pub source_index: usize,
    /// Copy of the node at projection time, for rendering only
    pub snapshot: TaskNode,
}

/// Derive the rows currently shown, hiding everything below a collapsed node.
///
/// Single pass: once a collapsed node is emitted, every following node deeper
/// than it is skipped until one at the same level or shallower shows up.
pub fn project(items: &[TaskNode]) -> Vec<VisibleItem> {
    let mut visible = Vec::with_capacity(items.len());
    let mut skip_level: Option<usize> = None;

    for (i, node) in items.iter().enumerate() {
        if let Some(level) = skip_level {
            if node.level > level {
                continue;
            }
            skip_level = None;
        }

        visible.push(VisibleItem {
            source_index: i,
            snapshot: node.clone(),
        });

        if node.collapsed {
            skip_level = Some(node.level);
        }
    }

    visible
}

/// Clamp a cursor into `[0, len - 1]`, or 0 for an empty sequence
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

/// Tree drawing for one row: the vertical guides of its ancestors and its own connector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGuide {
    pub prefix: String,
    pub connector: &'static str,
}

impl TreeGuide {
    /// Guide drawn under the connector on wrapped continuation lines
    pub fn continuation(&self) -> &'static str {
        match self.connector {
            " ├─" => " │ ",
            " └─" => "   ",
            _ => " ",
        }
    }
}

/// Compute the tree guide for row `i` of a displayed sequence of levels.
///
/// An ancestor column gets a `│` when a later row at that level appears before
/// the sequence climbs above it; a row is last in its group when no sibling
/// follows before a shallower row.
pub fn tree_guide(levels: &[usize], i: usize) -> TreeGuide {
    let level = levels[i];
    if level == 0 {
        return TreeGuide {
            prefix: String::new(),
            connector: " ",
        };
    }

    let rest = &levels[i + 1..];
    let mut prefix = String::from(" ");
    for column in 1..level {
        if continues_at(rest, column) {
            prefix.push_str(" │ ");
        } else {
            prefix.push_str("   ");
        }
    }

    let connector = if continues_at(rest, level) {
        " ├─"
    } else {
        " └─"
    };

    TreeGuide { prefix, connector }
}

fn continues_at(rest: &[usize], level: usize) -> bool {
    for &next in rest {
        if next < level {
            return false;
        }
        if next == level {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::ItemStore;

    fn node(title: &str, level: usize) -> TaskNode {
        TaskNode::new(title, level)
    }

    fn visible_titles(items: &[TaskNode]) -> Vec<String> {
        project(items)
            .into_iter()
            .map(|v| v.snapshot.title)
            .collect()
    }

    fn forest() -> Vec<TaskNode> {
        vec![
            node("A", 0),
            node("A1", 1),
            node("A1a", 2),
            node("A1b", 2),
            node("A2", 1),
            node("B", 0),
            node("B1", 1),
            node("C", 0),
        ]
    }

    #[test]
    fn test_project_without_collapse_visits_everything() {
        let items = forest();
        let visible = project(&items);

        assert_eq!(visible.len(), items.len());
        for (i, row) in visible.iter().enumerate() {
            assert_eq!(row.source_index, i);
        }
    }

    #[test]
    fn test_project_scenario_collapse_root() {
        let mut items = vec![node("A", 0), node("B", 1), node("C", 1), node("D", 0)];
        items[0].collapsed = true;

        assert_eq!(visible_titles(&items), vec!["A", "D"]);
        let visible = project(&items);
        assert_eq!(visible[1].source_index, 3);
    }

    #[test]
    fn test_project_nested_collapse() {
        let mut items = forest();
        items[1].collapsed = true;

        assert_eq!(visible_titles(&items), vec!["A", "A1", "A2", "B", "B1", "C"]);
    }

    #[test]
    fn test_project_collapse_inside_collapse() {
        let mut items = forest();
        items[0].collapsed = true;
        items[1].collapsed = true;
        items[5].collapsed = true;

        assert_eq!(visible_titles(&items), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_project_collapsed_leaf_hides_nothing() {
        let mut items = forest();
        items[7].collapsed = true;
        items[2].collapsed = true;

        assert_eq!(project(&items).len(), items.len());
    }

    #[test]
    fn test_project_omits_exactly_collapsed_descendants() {
        let base = forest();
        for collapsed in 0..base.len() {
            let mut items = base.clone();
            items[collapsed].collapsed = true;

            let store = ItemStore::new(items.clone(), Vec::new());
            let block = store.subtree_len(collapsed).unwrap();
            let hidden: Vec<usize> = (collapsed + 1..collapsed + block).collect();

            let shown: Vec<usize> = project(&items).iter().map(|v| v.source_index).collect();
            let expected: Vec<usize> = (0..items.len()).filter(|i| !hidden.contains(i)).collect();
            assert_eq!(shown, expected, "collapsing index {}", collapsed);
        }
    }

    #[test]
    fn test_project_empty() {
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(0, 0), 0);
        assert_eq!(clamp_cursor(5, 0), 0);
        assert_eq!(clamp_cursor(5, 3), 2);
        assert_eq!(clamp_cursor(1, 3), 1);
    }

    #[test]
    fn test_tree_guide_connectors() {
        let levels = [0, 1, 2, 2, 1, 0];

        assert_eq!(tree_guide(&levels, 0).connector, " ");
        assert_eq!(tree_guide(&levels, 1).connector, " ├─");
        assert_eq!(tree_guide(&levels, 2).connector, " ├─");
        assert_eq!(tree_guide(&levels, 3).connector, " └─");
        assert_eq!(tree_guide(&levels, 4).connector, " └─");
    }

    #[test]
    fn test_tree_guide_prefix_columns() {
        let levels = [0, 1, 2, 1, 2];

        // A level-1 sibling follows, so its column keeps a vertical guide
        assert_eq!(tree_guide(&levels, 2).prefix, "  │ ");
        // Last branch: nothing at level 1 follows
        assert_eq!(tree_guide(&levels, 4).prefix, "    ");
        assert_eq!(tree_guide(&levels, 1).prefix, " ");
    }

    #[test]
    fn test_tree_guide_continuation() {
        let levels = [0, 1, 1];
        assert_eq!(tree_guide(&levels, 1).continuation(), " │ ");
        assert_eq!(tree_guide(&levels, 2).continuation(), "   ");
        assert_eq!(tree_guide(&levels, 0).continuation(), " ");
    }
}
