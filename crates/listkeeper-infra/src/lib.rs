//! Infrastructure implementations for Listkeeper.
//!
//! Implements the `SessionStore` port from `listkeeper-core` in memory,
//! signs the session cookie, and loads `config.toml`.

pub mod config;
pub mod session;
