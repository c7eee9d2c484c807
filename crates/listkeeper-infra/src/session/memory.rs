//! DashMap-backed session store.
//!
//! Each session sits in its own map entry; holding the entry guard for the
//! duration of `with_session` serializes requests on the same session while
//! other sessions proceed on other shards.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use listkeeper_core::repository::session::SessionStore;
use listkeeper_types::session::{Session, SessionId};

struct StoredSession {
    session: Session,
    last_access: Instant,
}

impl StoredSession {
    fn new() -> Self {
        Self {
            session: Session::default(),
            last_access: Instant::now(),
        }
    }
}

/// Process-local session store. Sessions are lost on restart.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, StoredSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session exists, without creating or touching it.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    fn purge_idle_at(&self, max_idle: Duration, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, stored| now.saturating_duration_since(stored.last_access) < max_idle);
        before.saturating_sub(self.sessions.len())
    }
}

impl SessionStore for InMemorySessionStore {
    fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut entry = self.sessions.entry(*id).or_insert_with(StoredSession::new);
        entry.last_access = Instant::now();
        f(&mut entry.session)
    }

    fn with_existing_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R {
        match self.sessions.get_mut(id) {
            Some(mut stored) => {
                stored.last_access = Instant::now();
                f(&mut stored.session)
            }
            None => f(&mut Session::default()),
        }
    }

    fn remove(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    fn purge_idle(&self, max_idle: Duration) -> usize {
        let removed = self.purge_idle_at(max_idle, Instant::now());
        if removed > 0 {
            tracing::debug!(removed, remaining = self.sessions.len(), "purged idle sessions");
        }
        removed
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use listkeeper_types::list::TodoList;

    #[test]
    fn test_session_created_lazily() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        assert!(!store.contains(&id));

        let count = store.with_session(&id, |s| s.lists.len());

        assert_eq!(count, 0);
        assert!(store.contains(&id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mutations_persist_between_calls() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();

        store.with_session(&id, |s| s.lists.push(TodoList::new("Chores")));
        let names: Vec<String> =
            store.with_session(&id, |s| s.lists.iter().map(|l| l.name.clone()).collect());

        assert_eq!(names, vec!["Chores".to_string()]);
    }

    #[test]
    fn test_existing_session_access_never_inserts() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();

        let count = store.with_existing_session(&id, |s| {
            s.lists.push(TodoList::new("Scratch"));
            s.lists.len()
        });

        assert_eq!(count, 1);
        assert!(!store.contains(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_existing_session_access_sees_and_touches_stored_session() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        store.with_session(&id, |s| s.lists.push(TodoList::new("Chores")));
        std::thread::sleep(Duration::from_millis(30));

        let names: Vec<String> = store.with_existing_session(&id, |s| {
            s.lists.iter().map(|l| l.name.clone()).collect()
        });

        assert_eq!(names, vec!["Chores".to_string()]);
        assert_eq!(store.purge_idle(Duration::from_millis(20)), 0);
        assert!(store.contains(&id));
    }

    #[test]
    fn test_remove() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();
        store.with_session(&id, |_| ());
        assert!(store.remove(&id));
        assert!(!store.remove(&id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_purge_idle_removes_only_stale_sessions() {
        let store = InMemorySessionStore::new();
        let stale = SessionId::new();
        let fresh = SessionId::new();
        store.with_session(&stale, |_| ());
        std::thread::sleep(Duration::from_millis(30));
        store.with_session(&fresh, |_| ());

        let removed = store.purge_idle(Duration::from_millis(20));

        assert_eq!(removed, 1);
        assert!(!store.contains(&stale));
        assert!(store.contains(&fresh));
    }

    #[test]
    fn test_purge_at_future_instant_removes_everything() {
        let store = InMemorySessionStore::new();
        store.with_session(&SessionId::new(), |_| ());
        store.with_session(&SessionId::new(), |_| ());

        let later = Instant::now() + Duration::from_secs(120);
        assert_eq!(store.purge_idle_at(Duration::from_secs(60), later), 2);
        assert!(store.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_to_one_session_are_not_lost() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = SessionId::new();
        store.with_session(&id, |s| s.lists.push(TodoList::new("Counter")));

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.with_session(&id, |s| {
                    s.lists[0]
                        .todos
                        .push(listkeeper_types::list::TodoItem::new(format!("item {i}")));
                });
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let count = store.with_session(&id, |s| s.lists[0].todos.len());
        assert_eq!(count, 50);
    }
}
