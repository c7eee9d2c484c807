//! List repository over one session's list collection.

use listkeeper_types::error::ListError;
use listkeeper_types::list::{ListId, TodoList};

use crate::validation::validate_list_name;

/// Mutations and lookups on a session's lists, addressed by position.
///
/// Positions shift down by one after a deletion; callers that need a
/// reference that survives that use [`ListRepository::find_index_by_id`].
pub struct ListRepository<'a> {
    lists: &'a mut Vec<TodoList>,
}

impl<'a> ListRepository<'a> {
    pub fn new(lists: &'a mut Vec<TodoList>) -> Self {
        Self { lists }
    }

    /// Validate `name` and append a new empty list. Returns its position.
    pub fn create(&mut self, name: &str) -> Result<usize, ListError> {
        validate_list_name(name, self.lists.iter())?;
        self.lists.push(TodoList::new(name));
        Ok(self.lists.len() - 1)
    }

    /// Rename the list at `index`. The new name only has to differ from the
    /// other lists, so keeping the current name is accepted.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), ListError> {
        if index >= self.lists.len() {
            return Err(ListError::ListNotFound(index));
        }

        let others = self
            .lists
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, list)| list);
        validate_list_name(new_name, others)?;

        self.lists[index].name = new_name.to_string();
        Ok(())
    }

    /// Remove and return the list at `index`.
    pub fn delete(&mut self, index: usize) -> Result<TodoList, ListError> {
        if index >= self.lists.len() {
            return Err(ListError::ListNotFound(index));
        }
        Ok(self.lists.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&TodoList, ListError> {
        self.lists.get(index).ok_or(ListError::ListNotFound(index))
    }

    /// Position of the first list named exactly `name`.
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.name == name)
    }

    /// Current position of the list with the given stable id.
    pub fn find_index_by_id(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == *id)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
