//! Shared domain types for Listkeeper.
//!
//! This crate contains the domain types used across the Listkeeper workspace:
//! to-do lists, their items, the visitor session with its flash queue, the
//! error enums, and the configuration schema.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod config;
pub mod error;
pub mod list;
pub mod session;
