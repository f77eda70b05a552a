//! Mutating operations over a session's lists and tasks.
//!
//! Every write validates before it touches storage, so a failed call leaves
//! the collection exactly as it was.

pub mod lists;
pub mod tasks;

pub use lists::*;
pub use tasks::*;

use serde::{Deserialize, Serialize};

/// Where the new value of a toggled task comes from.
///
/// - `ClientAsserted`: negate the flag the client says it displayed. A client
///   that misreports the flag can desynchronize the task.
/// - `ServerState`: negate the stored flag and ignore the client.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToggleMode {
    #[default]
    ClientAsserted,
    ServerState,
}

impl ToggleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientAsserted => "client",
            Self::ServerState => "server",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "client" | "client_asserted" => Some(Self::ClientAsserted),
            "server" | "server_state" => Some(Self::ServerState),
            _ => None,
        }
    }
}

/// Which lists a renamed list's new name must differ from.
///
/// - `ExcludeSelf`: every list except the one being renamed, so a list may
///   keep its own name.
/// - `AllLists`: every list including itself. Renaming a list to its current
///   name is then rejected as a duplicate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScope {
    #[default]
    ExcludeSelf,
    AllLists,
}

impl DuplicateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExcludeSelf => "exclude_self",
            Self::AllLists => "all_lists",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "exclude_self" => Some(Self::ExcludeSelf),
            "all_lists" => Some(Self::AllLists),
            _ => None,
        }
    }
}

/// Behaviour switches for the handful of operations with more than one
/// defensible reading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreOptions {
    pub toggle_mode: ToggleMode,
    pub rename_scope: DuplicateScope,
}
