//! Services that run list operations against a session store.

pub mod list;
