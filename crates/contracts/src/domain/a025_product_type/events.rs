use serde::{Deserialize, Serialize};

/// Drag/move of one row inside an ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEvent {
    pub old_index: usize,
    pub new_index: usize,
}

impl ReorderEvent {
    pub fn new(old_index: usize, new_index: usize) -> Self {
        Self {
            old_index,
            new_index,
        }
    }

    /// Move one row up, `None` for the first row
    pub fn up(index: usize) -> Option<Self> {
        index.checked_sub(1).map(|target| Self::new(index, target))
    }

    /// Move one row down, `None` for the last row
    pub fn down(index: usize, len: usize) -> Option<Self> {
        (index + 1 < len).then(|| Self::new(index, index + 1))
    }

    /// Apply the move to `items`. Out-of-range indexes leave the list untouched.
    pub fn apply<T>(&self, items: &mut Vec<T>) -> bool {
        if self.old_index >= items.len() || self.new_index >= items.len() {
            return false;
        }
        if self.old_index != self.new_index {
            let item = items.remove(self.old_index);
            items.insert(self.new_index, item);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_moves_forward_and_back() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        assert!(ReorderEvent::new(1, 3).apply(&mut items));
        assert_eq!(items, vec!['a', 'c', 'd', 'b']);

        assert!(ReorderEvent::new(3, 0).apply(&mut items));
        assert_eq!(items, vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut items = vec![1, 2];
        assert!(!ReorderEvent::new(0, 2).apply(&mut items));
        assert!(!ReorderEvent::new(5, 0).apply(&mut items));
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn test_up_down_bounds() {
        assert_eq!(ReorderEvent::up(0), None);
        assert_eq!(ReorderEvent::up(2), Some(ReorderEvent::new(2, 1)));
        assert_eq!(ReorderEvent::down(2, 3), None);
        assert_eq!(ReorderEvent::down(0, 3), Some(ReorderEvent::new(0, 1)));
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(ReorderEvent::new(1, 0)).unwrap();
        assert_eq!(json, serde_json::json!({ "oldIndex": 1, "newIndex": 0 }));
    }
}
