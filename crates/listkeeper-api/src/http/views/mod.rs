//! Server-rendered HTML pages.

pub mod layout;
pub mod list;
pub mod lists;
