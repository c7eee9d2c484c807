//! Derived values for rendering lists. Pure; nothing here mutates.

use std::fmt;

use listkeeper_types::list::TodoList;

/// Remaining and total item counts for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCounts {
    pub remaining: usize,
    pub total: usize,
}

impl fmt::Display for ItemCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remaining, self.total)
    }
}

/// True when the list has items and every one is completed.
pub fn is_list_complete(list: &TodoList) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|item| item.completed)
}

/// CSS class for a list row: `"complete"` for finished lists.
pub fn list_css_class(list: &TodoList) -> Option<&'static str> {
    is_list_complete(list).then_some("complete")
}

pub fn item_counts(list: &TodoList) -> ItemCounts {
    ItemCounts {
        remaining: list.todos.iter().filter(|item| !item.completed).count(),
        total: list.todos.len(),
    }
}

/// Fraction of items still open, in `[0, 1]`. An empty list counts as fully
/// remaining (`1.0`). Despite the name this is not scaled to 100.
pub fn percent_remaining(list: &TodoList) -> f64 {
    let counts = item_counts(list);
    if counts.total == 0 {
        return 1.0;
    }
    counts.remaining as f64 / counts.total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use listkeeper_types::list::TodoItem;

    fn list_of(flags: &[bool]) -> TodoList {
        let mut list = TodoList::new("l");
        list.todos = flags
            .iter()
            .enumerate()
            .map(|(i, done)| TodoItem {
                completed: *done,
                ..TodoItem::new(format!("item {i}"))
            })
            .collect();
        list
    }

    #[test]
    fn test_empty_list_is_not_complete() {
        let list = list_of(&[]);
        assert!(!is_list_complete(&list));
        assert_eq!(list_css_class(&list), None);
    }

    #[test]
    fn test_all_done_is_complete() {
        let list = list_of(&[true, true]);
        assert!(is_list_complete(&list));
        assert_eq!(list_css_class(&list), Some("complete"));
    }

    #[test]
    fn test_partially_done_is_not_complete() {
        assert!(!is_list_complete(&list_of(&[true, false])));
    }

    #[test]
    fn test_item_counts() {
        let counts = item_counts(&list_of(&[true, false, false]));
        assert_eq!(counts, ItemCounts { remaining: 2, total: 3 });
        assert_eq!(counts.to_string(), "2/3");
    }

    #[test]
    fn test_percent_remaining() {
        assert_eq!(percent_remaining(&list_of(&[])), 1.0);
        assert_eq!(percent_remaining(&list_of(&[true, false])), 0.5);
        assert_eq!(percent_remaining(&list_of(&[true, true])), 0.0);
        assert_eq!(percent_remaining(&list_of(&[false, false])), 1.0);
    }
}
