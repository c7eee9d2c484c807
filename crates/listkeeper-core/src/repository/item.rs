//! Item repository over a single list's todos.

use listkeeper_types::error::ListError;
use listkeeper_types::list::{ItemId, TodoItem, TodoList};

use crate::validation::validate_item_name;

/// Mutations and lookups on one list's items, addressed by position.
pub struct ItemRepository<'a> {
    list: &'a mut TodoList,
    list_index: usize,
}

impl<'a> ItemRepository<'a> {
    /// Bind to the list at `list_index`, or fail with `ListNotFound`.
    pub fn for_list(lists: &'a mut [TodoList], list_index: usize) -> Result<Self, ListError> {
        let list = lists
            .get_mut(list_index)
            .ok_or(ListError::ListNotFound(list_index))?;
        Ok(Self { list, list_index })
    }

    /// Validate `name` against this list's items and append it, incomplete.
    /// Returns the new item's position.
    pub fn add(&mut self, name: &str) -> Result<usize, ListError> {
        validate_item_name(name, self.list.todos.iter())?;
        self.list.todos.push(TodoItem::new(name));
        Ok(self.list.todos.len() - 1)
    }

    /// Remove and return the item at `item_index`; later items shift down.
    pub fn delete(&mut self, item_index: usize) -> Result<TodoItem, ListError> {
        self.check_item(item_index)?;
        Ok(self.list.todos.remove(item_index))
    }

    /// Overwrite the completion flag of the item at `item_index`.
    pub fn set_completion(&mut self, item_index: usize, completed: bool) -> Result<(), ListError> {
        self.check_item(item_index)?;
        self.list.todos[item_index].completed = completed;
        Ok(())
    }

    /// Mark every item completed. Returns how many were not completed before.
    pub fn complete_all(&mut self) -> usize {
        let mut changed = 0;
        for item in self.list.todos.iter_mut().filter(|item| !item.completed) {
            item.completed = true;
            changed += 1;
        }
        changed
    }

    pub fn get(&self, item_index: usize) -> Result<&TodoItem, ListError> {
        self.list.todos.get(item_index).ok_or(ListError::ItemNotFound {
            list: self.list_index,
            item: item_index,
        })
    }

    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.list.todos.iter().position(|item| item.name == name)
    }

    pub fn find_index_by_id(&self, id: &ItemId) -> Option<usize> {
        self.list.todos.iter().position(|item| item.id == *id)
    }

    pub fn len(&self) -> usize {
        self.list.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.todos.is_empty()
    }

    fn check_item(&self, item_index: usize) -> Result<(), ListError> {
        self.get(item_index).map(|_| ())
    }
}
