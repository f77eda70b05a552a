//! Domain models for listkeeper.
//!
//! # Core Concepts
//!
//! - [`TodoList`]: A named, ordered collection of tasks. List names are unique
//!   within a session.
//! - [`Task`]: A named unit of work with a completion flag.
//! - [`SessionState`]: Everything one browser session owns. It is created empty
//!   and discarded when the session expires.
//!
//! Neither lists nor tasks carry ids. They are addressed by their position in
//! the owning sequence, and a delete re-indexes everything after it.

mod list;
mod session;
mod task;

pub use list::*;
pub use session::*;
pub use task::*;
