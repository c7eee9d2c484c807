//! Session storage and cookie signing.

pub mod cookie;
pub mod memory;

pub use cookie::CookieSigner;
pub use memory::InMemorySessionStore;
