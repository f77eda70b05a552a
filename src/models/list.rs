use serde::{Deserialize, Serialize};

use super::task::Task;

/// A named list of tasks.
///
/// Tasks keep insertion order; deleting one shifts every later task down a
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Task>,
}

impl TodoList {
    /// A new list with no tasks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

/// Input for creating or renaming a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListNameInput {
    pub list_name: String,
}
