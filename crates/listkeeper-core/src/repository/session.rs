//! Session store trait definition.

use std::time::Duration;

use listkeeper_types::session::{Session, SessionId};

/// Storage for visitor sessions.
///
/// Implementations live in listkeeper-infra (e.g., InMemorySessionStore).
/// `with_session` must hold exclusive access to that one session for the
/// whole closure, so two requests on the same session cannot interleave
/// their read-modify-write. Sessions that do not exist yet are created empty
/// by `with_session` only.
pub trait SessionStore: Send + Sync {
    /// Run `f` with exclusive access to the session, creating it if needed.
    fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R;

    /// Run `f` with exclusive access to the session if it exists. Otherwise
    /// `f` sees a transient empty session that is discarded afterwards, so
    /// reads never allocate a stored session.
    fn with_existing_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> R;

    /// Drop a session. Returns whether it existed.
    fn remove(&self, id: &SessionId) -> bool;

    /// Drop every session not accessed within `max_idle`. Returns how many
    /// were removed.
    fn purge_idle(&self, max_idle: Duration) -> usize;

    /// Number of live sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
