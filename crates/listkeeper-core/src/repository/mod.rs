//! Repository definitions.
//!
//! `list` and `item` operate in memory on a borrowed session; `session` is
//! the storage port that the infrastructure layer (listkeeper-infra)
//! implements.

pub mod item;
pub mod list;
pub mod session;
