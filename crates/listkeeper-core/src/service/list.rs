//! List service.
//!
//! Runs every list and item operation against one visitor's session: trim the
//! input, validate, mutate through the repositories, and record the outcome
//! as a flash message, while the store holds that session exclusively.
//! Rendering goes through [`ListService::present`], which reads the lists and
//! drains pending flashes in the same locked step.

use listkeeper_types::error::ListError;
use listkeeper_types::list::{TodoItem, TodoList};
use listkeeper_types::session::{Flash, Session, SessionId};

use crate::repository::item::ItemRepository;
use crate::repository::list::ListRepository;
use crate::repository::session::SessionStore;

const LIST_CREATED: &str = "The list has been created";
const LIST_UPDATED: &str = "The list has been updated.";
const LIST_DELETED: &str = "List has been deleted.";
const ITEM_ADDED: &str = "The list item was added.";
const ITEM_DELETED: &str = "List item has been deleted.";
const ITEM_UPDATED: &str = "Item has been updated!";
const ALL_COMPLETED: &str = "All items have been completed.";

/// Service orchestrating list and item changes for visitor sessions.
///
/// Generic over the session store so listkeeper-core never depends on
/// listkeeper-infra.
pub struct ListService<S: SessionStore> {
    store: S,
}

/// Outcome of a form submission that re-renders the form on rejected input.
#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome<T, R> {
    /// The change was applied.
    Saved(T),
    /// Validation failed; holds the form rendered with the error flash.
    Rejected(R),
}

impl<S: SessionStore> ListService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for housekeeping such as idle purges.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a list named `name` (surrounding whitespace trimmed).
    /// Returns the new list's position.
    pub fn create_list(&self, session: &SessionId, name: &str) -> Result<usize, ListError> {
        let name = name.trim();
        let result = self.mutate(session, LIST_CREATED, |lists| {
            ListRepository::new(lists).create(name)
        });
        if let Ok(index) = result {
            tracing::info!(%session, index, "list created");
        }
        result
    }

    pub fn rename_list(
        &self,
        session: &SessionId,
        index: usize,
        new_name: &str,
    ) -> Result<(), ListError> {
        let new_name = new_name.trim();
        let result = self.mutate(session, LIST_UPDATED, |lists| {
            ListRepository::new(lists).rename(index, new_name)
        });
        if result.is_ok() {
            tracing::info!(%session, index, "list renamed");
        }
        result
    }

    pub fn delete_list(&self, session: &SessionId, index: usize) -> Result<TodoList, ListError> {
        let result = self.mutate(session, LIST_DELETED, |lists| {
            ListRepository::new(lists).delete(index)
        });
        if let Ok(list) = &result {
            tracing::info!(%session, index, items = list.todos.len(), "list deleted");
        }
        result
    }

    /// Add an item to the list at `list_index`. Returns the item's position.
    pub fn add_item(
        &self,
        session: &SessionId,
        list_index: usize,
        name: &str,
    ) -> Result<usize, ListError> {
        let name = name.trim();
        let result = self.mutate(session, ITEM_ADDED, |lists| {
            ItemRepository::for_list(lists, list_index)?.add(name)
        });
        if let Ok(item_index) = result {
            tracing::info!(%session, list_index, item_index, "item added");
        }
        result
    }

    pub fn delete_item(
        &self,
        session: &SessionId,
        list_index: usize,
        item_index: usize,
    ) -> Result<TodoItem, ListError> {
        let result = self.mutate(session, ITEM_DELETED, |lists| {
            ItemRepository::for_list(lists, list_index)?.delete(item_index)
        });
        if result.is_ok() {
            tracing::info!(%session, list_index, item_index, "item deleted");
        }
        result
    }

    pub fn set_item_completion(
        &self,
        session: &SessionId,
        list_index: usize,
        item_index: usize,
        completed: bool,
    ) -> Result<(), ListError> {
        let result = self.mutate(session, ITEM_UPDATED, |lists| {
            ItemRepository::for_list(lists, list_index)?.set_completion(item_index, completed)
        });
        if result.is_ok() {
            tracing::info!(%session, list_index, item_index, completed, "item completion set");
        }
        result
    }

    /// Mark every item of the list completed. Returns how many changed.
    pub fn complete_all(&self, session: &SessionId, list_index: usize) -> Result<usize, ListError> {
        let result = self.mutate(session, ALL_COMPLETED, |lists| {
            Ok(ItemRepository::for_list(lists, list_index)?.complete_all())
        });
        if let Ok(changed) = result {
            tracing::info!(%session, list_index, changed, "all items completed");
        }
        result
    }

    /// Like [`create_list`](Self::create_list), but a rejected name renders
    /// the form with `render` while the session is still held, so the error
    /// flash cannot be drained by another request first.
    pub fn submit_new_list<R>(
        &self,
        session: &SessionId,
        name: &str,
        render: impl FnOnce(&[TodoList], &[Flash]) -> Result<R, ListError>,
    ) -> Result<FormOutcome<usize, R>, ListError> {
        let name = name.trim();
        let outcome = self.submit(session, LIST_CREATED, render, |lists| {
            ListRepository::new(lists).create(name)
        });
        if let Ok(FormOutcome::Saved(index)) = &outcome {
            tracing::info!(%session, index, "list created");
        }
        outcome
    }

    /// Rename counterpart of [`submit_new_list`](Self::submit_new_list).
    pub fn submit_rename<R>(
        &self,
        session: &SessionId,
        index: usize,
        new_name: &str,
        render: impl FnOnce(&[TodoList], &[Flash]) -> Result<R, ListError>,
    ) -> Result<FormOutcome<(), R>, ListError> {
        let new_name = new_name.trim();
        let outcome = self.submit(session, LIST_UPDATED, render, |lists| {
            ListRepository::new(lists).rename(index, new_name)
        });
        if let Ok(FormOutcome::Saved(())) = &outcome {
            tracing::info!(%session, index, "list renamed");
        }
        outcome
    }

    pub fn find_list_index_by_name(&self, session: &SessionId, name: &str) -> Option<usize> {
        self.store.with_existing_session(session, |s| {
            s.lists.iter().position(|list| list.name == name)
        })
    }

    /// Copy of the visitor's lists. Leaves pending flashes untouched and
    /// never creates a session.
    pub fn lists(&self, session: &SessionId) -> Vec<TodoList> {
        self.store.with_existing_session(session, |s| s.lists.clone())
    }

    /// Render from the visitor's lists and pending flashes.
    ///
    /// The flashes are cleared only when `render` succeeds, so a not-found
    /// page does not swallow a message meant for the next real page. A
    /// visitor without a stored session renders from an empty one.
    pub fn present<T>(
        &self,
        session: &SessionId,
        render: impl FnOnce(&[TodoList], &[Flash]) -> Result<T, ListError>,
    ) -> Result<T, ListError> {
        self.store
            .with_existing_session(session, |s| render_and_drain(s, render))
    }

    fn mutate<T>(
        &self,
        session: &SessionId,
        success: &str,
        op: impl FnOnce(&mut Vec<TodoList>) -> Result<T, ListError>,
    ) -> Result<T, ListError> {
        self.store
            .with_session(session, |s| apply(session, s, success, op))
    }

    fn submit<T, R>(
        &self,
        session: &SessionId,
        success: &str,
        render: impl FnOnce(&[TodoList], &[Flash]) -> Result<R, ListError>,
        op: impl FnOnce(&mut Vec<TodoList>) -> Result<T, ListError>,
    ) -> Result<FormOutcome<T, R>, ListError> {
        self.store.with_session(session, |s| {
            match apply(session, s, success, op) {
                Ok(value) => Ok(FormOutcome::Saved(value)),
                Err(ListError::Validation(_)) => {
                    render_and_drain(s, render).map(FormOutcome::Rejected)
                }
                Err(e) => Err(e),
            }
        })
    }
}

/// Run `op` and record its outcome as a flash.
fn apply<T>(
    session: &SessionId,
    s: &mut Session,
    success: &str,
    op: impl FnOnce(&mut Vec<TodoList>) -> Result<T, ListError>,
) -> Result<T, ListError> {
    let result = op(&mut s.lists);
    match &result {
        Ok(_) => s.flash.push(Flash::success(success)),
        Err(ListError::Validation(e)) => {
            tracing::debug!(%session, error = %e, "rejected input");
            s.flash.push(Flash::error(e.to_string()));
        }
        Err(e) => tracing::debug!(%session, error = %e, "lookup failed"),
    }
    result
}

fn render_and_drain<T>(
    s: &mut Session,
    render: impl FnOnce(&[TodoList], &[Flash]) -> Result<T, ListError>,
) -> Result<T, ListError> {
    let out = render(&s.lists, s.flash.pending())?;
    s.flash.clear();
    Ok(out)
}
