use super::error::EditError;
use super::item::TaskNode;

/// Active tasks as a flattened pre-order forest, plus the trash bin.
///
/// The store only offers structural primitives; deciding *when* to use
/// them (and persisting afterwards) is up to `AppState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    pub items: Vec<TaskNode>,
    pub trash: Vec<TaskNode>,
}

impl ItemStore {
    pub fn new(items: Vec<TaskNode>, trash: Vec<TaskNode>) -> Self {
        Self { items, trash }
    }

    pub fn get(&self, index: usize) -> Result<&TaskNode, EditError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut TaskNode, EditError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }

    /// Size of the block rooted at `index`: the node itself plus the run of
    /// immediately following nodes that are strictly deeper.
    pub fn subtree_len(&self, index: usize) -> Result<usize, EditError> {
        let level = self.get(index)?.level;
        let descendants = self.items[index + 1..]
            .iter()
            .take_while(|node| node.level > level)
            .count();
        Ok(1 + descendants)
    }

    /// True when the next node exists and is deeper than this one
    pub fn has_children(&self, index: usize) -> bool {
        match (self.items.get(index), self.items.get(index + 1)) {
            (Some(node), Some(next)) => next.level > node.level,
            _ => false,
        }
    }

    /// Append a node at the end of the active list, returning its index
    pub fn push(&mut self, node: TaskNode) -> usize {
        self.items.push(node);
        self.items.len() - 1
    }

    /// Insert a node at `index`, shifting everything after it down by one
    pub fn insert(&mut self, index: usize, node: TaskNode) -> Result<(), EditError> {
        let len = self.items.len();
        if index > len {
            return Err(EditError::IndexOutOfRange { index, len });
        }
        self.items.insert(index, node);
        Ok(())
    }

    /// Remove a single node without touching the trash
    pub fn remove(&mut self, index: usize) -> Result<TaskNode, EditError> {
        self.get(index)?;
        Ok(self.items.remove(index))
    }

    /// Move the block rooted at `index` to the end of the trash, keeping
    /// relative order and levels. Returns the number of nodes moved.
    pub fn trash_subtree(&mut self, index: usize) -> Result<usize, EditError> {
        let count = self.subtree_len(index)?;
        let block: Vec<TaskNode> = self.items.drain(index..index + count).collect();
        self.trash.extend(block);
        Ok(count)
    }

    /// Move one trash entry back to the end of the active list.
    /// Returns the index it now occupies in `items`.
    pub fn restore(&mut self, trash_index: usize) -> Result<usize, EditError> {
        let node = self.take_trash(trash_index)?;
        Ok(self.push(node))
    }

    /// Permanently drop one trash entry
    pub fn purge(&mut self, trash_index: usize) -> Result<TaskNode, EditError> {
        self.take_trash(trash_index)
    }

    fn take_trash(&mut self, trash_index: usize) -> Result<TaskNode, EditError> {
        if self.trash.is_empty() {
            return Err(EditError::EmptyTrash);
        }
        let len = self.trash.len();
        if trash_index >= len {
            return Err(EditError::IndexOutOfRange {
                index: trash_index,
                len,
            });
        }
        Ok(self.trash.remove(trash_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(title: &str, level: usize) -> TaskNode {
        TaskNode::new(title, level)
    }

    fn titles(nodes: &[TaskNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    fn sample() -> ItemStore {
        ItemStore::new(
            vec![
                node("A", 0),
                node("B", 1),
                node("B1", 2),
                node("C", 1),
                node("D", 0),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_subtree_len() {
        let store = sample();
        assert_eq!(store.subtree_len(0), Ok(4));
        assert_eq!(store.subtree_len(1), Ok(2));
        assert_eq!(store.subtree_len(3), Ok(1));
        assert_eq!(store.subtree_len(4), Ok(1));
        assert_eq!(
            store.subtree_len(5),
            Err(EditError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_has_children() {
        let store = sample();
        assert!(store.has_children(0));
        assert!(store.has_children(1));
        assert!(!store.has_children(2));
        assert!(!store.has_children(4));
        assert!(!store.has_children(99));
    }

    #[test]
    fn test_trash_subtree_moves_contiguous_block() {
        let mut store = sample();
        let moved = store.trash_subtree(1).unwrap();

        assert_eq!(moved, 2);
        assert_eq!(titles(&store.items), vec!["A", "C", "D"]);
        assert_eq!(titles(&store.trash), vec!["B", "B1"]);
        assert_eq!(store.trash[1].level, 2);
    }

    #[test]
    fn test_trash_subtree_appends_after_existing_trash() {
        let mut store = sample();
        store.trash_subtree(4).unwrap();
        store.trash_subtree(0).unwrap();

        assert!(store.items.is_empty());
        assert_eq!(titles(&store.trash), vec!["D", "A", "B", "B1", "C"]);
    }

    #[test]
    fn test_restore_appends_single_entry() {
        let mut store = sample();
        store.trash_subtree(0).unwrap();
        assert_eq!(titles(&store.items), vec!["D"]);

        let idx = store.restore(1).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(titles(&store.items), vec!["D", "B"]);
        assert_eq!(store.items[1].level, 1);
        assert_eq!(titles(&store.trash), vec!["A", "B1", "C"]);
    }

    #[test]
    fn test_restore_and_purge_on_empty_trash() {
        let mut store = sample();
        assert_eq!(store.restore(0), Err(EditError::EmptyTrash));
        assert_eq!(store.purge(0), Err(EditError::EmptyTrash));
    }

    #[test]
    fn test_purge_removes_only_target() {
        let mut store = sample();
        store.trash_subtree(0).unwrap();
        let purged = store.purge(0).unwrap();

        assert_eq!(purged.title, "A");
        assert_eq!(titles(&store.trash), vec!["B", "B1", "C"]);
        assert_eq!(store.items.len(), 1);
    }

    #[test]
    fn test_insert_bounds() {
        let mut store = sample();
        store.insert(5, node("E", 0)).unwrap();
        assert_eq!(store.items.last().unwrap().title, "E");
        assert!(store.insert(7, node("F", 0)).is_err());
    }
}
