//! Session-scoped to-do lists.
//!
//! The core ([`validation`], [`store`], [`ordering`]) works on an explicit
//! [`models::SessionState`] and never touches global state. The [`session`]
//! registry and the [`api`] router are thin layers that own session
//! lifecycles and render core results as JSON.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod ordering;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{Result, TodoError};
