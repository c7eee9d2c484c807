//! Visitor session state and the one-shot flash queue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::list::TodoList;

/// Identifier of one visitor's session. Random (v4) so it cannot be guessed
/// from neighbouring ids; the cookie carrying it is additionally signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Everything the server keeps for one visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub lists: Vec<TodoList>,
    pub flash: FlashQueue,
}

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Error,
    Success,
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashKind::Error => write!(f, "error"),
            FlashKind::Success => write!(f, "success"),
        }
    }
}

/// A notification shown on the next render and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }
}

/// Ordered queue of pending flash messages.
///
/// Producers only push; the render step reads [`FlashQueue::pending`] and
/// then clears the queue while still holding the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashQueue {
    pending: Vec<Flash>,
}

impl FlashQueue {
    pub fn push(&mut self, flash: Flash) {
        self.pending.push(flash);
    }

    /// Messages waiting to be displayed, oldest first.
    pub fn pending(&self) -> &[Flash] {
        &self.pending
    }

    /// Remove and return every pending message.
    pub fn take(&mut self) -> Vec<Flash> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::default();
        assert!(session.lists.is_empty());
        assert!(session.flash.is_empty());
    }

    #[test]
    fn test_flash_queue_take_drains_in_order() {
        let mut queue = FlashQueue::default();
        queue.push(Flash::error("first"));
        queue.push(Flash::success("second"));

        let taken = queue.take();
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].message, "first");
        assert_eq!(taken[1].kind, FlashKind::Success);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn test_flash_kind_display() {
        assert_eq!(FlashKind::Error.to_string(), "error");
        assert_eq!(FlashKind::Success.to_string(), "success");
    }
}
