//! Business logic and the session-store port for Listkeeper.
//!
//! This crate defines the `SessionStore` trait that the infrastructure layer
//! implements, plus everything that runs against one visitor's lists:
//! validation, the list and item repositories, view helpers, and the
//! `ListService` that ties them together. It depends only on
//! `listkeeper-types` -- never on `listkeeper-infra` or any I/O crate.

pub mod repository;
pub mod service;
pub mod validation;
pub mod view;
