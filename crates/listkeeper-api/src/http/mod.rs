//! HTTP layer for Listkeeper.
//!
//! Axum router serving server-rendered HTML. Every list route runs behind the
//! session middleware, which resolves the visitor's signed cookie.

pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod views;
