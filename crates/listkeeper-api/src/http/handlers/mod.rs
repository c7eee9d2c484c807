//! HTTP request handlers.

pub mod health;
pub mod items;
pub mod lists;
