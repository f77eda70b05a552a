//! Error types for list and task operations.

use std::fmt;

use thiserror::Error;

/// What a failed length check was validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSubject {
    List,
    Task,
}

/// What a stale or tampered position referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKind {
    List,
    Task,
}

/// Errors returned by the core. None of them leave partial writes behind.
///
/// The `Display` text is the user-facing message, so callers can surface it
/// verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Name length outside 1..=100 characters.
    #[error("{subject} name must be between 1 and 100 characters.")]
    InvalidLength { subject: NameSubject },

    /// Another list in the session already uses this name.
    #[error("List name already exists.")]
    DuplicateName,

    /// Complete-all was requested on a list with no tasks.
    #[error("There are currently no to do's to mark.")]
    EmptyList,

    /// A positional reference does not resolve.
    #[error("No {kind} at position {index}.")]
    IndexOutOfRange { kind: PositionKind, index: usize },
}

impl fmt::Display for NameSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("List"),
            Self::Task => f.write_str("To do"),
        }
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Task => f.write_str("to do"),
        }
    }
}

impl TodoError {
    /// True for errors caused by a position the client should not have sent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Convenience Result type for core operations.
pub type Result<T> = std::result::Result<T, TodoError>;
