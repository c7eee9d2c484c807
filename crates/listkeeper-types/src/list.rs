use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Shortest accepted list or item name, in characters.
pub const MIN_NAME_CHARS: usize = 1;

/// Longest accepted list or item name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Stable identifier for a list, wrapping a UUID v7 (time-sortable).
///
/// Routes still address lists by position; the id survives deletions of
/// earlier siblings and can be resolved back to the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(pub Uuid);

impl ListId {
    /// Create a new ListId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Stable identifier for an item within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Create a new ItemId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of items belonging to one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    /// Display name, unique within the session.
    pub name: String,
    /// Items in display order.
    pub todos: Vec<TodoItem>,
}

impl TodoList {
    /// Create an empty list with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

/// A named task with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: ItemId,
    /// Display name, unique within the owning list.
    pub name: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create an incomplete item with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let list = TodoList::new("Groceries");
        assert_eq!(list.name, "Groceries");
        assert!(list.todos.is_empty());
    }

    #[test]
    fn test_new_item_is_incomplete() {
        let item = TodoItem::new("Milk");
        assert_eq!(item.name, "Milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(TodoList::new("a").id, TodoList::new("a").id);
        assert_ne!(TodoItem::new("a").id, TodoItem::new("a").id);
    }

    #[test]
    fn test_list_id_roundtrip_through_display() {
        let id = ListId::new();
        let parsed: ListId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_list_serializes_with_todos() {
        let mut list = TodoList::new("Chores");
        list.todos.push(TodoItem::new("Wash dishes"));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["name"], "Chores");
        assert_eq!(json["todos"][0]["name"], "Wash dishes");
        assert_eq!(json["todos"][0]["completed"], false);
    }
}
