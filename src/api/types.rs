//! Response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::{Task, TodoList};
use crate::ordering::{completion_ratio_text, is_list_complete, list_class, sorted_tasks};

/// Flavour of a notice, mirroring the success/error flash of a page render.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Info,
}

/// Confirmation message returned by every mutating endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// One row of the list overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListSummary {
    /// Storage position; use it to address the list.
    pub index: usize,
    pub name: String,
    pub complete: bool,
    /// Open tasks over total, e.g. `"2 / 3"`.
    pub remaining: String,
    pub class: Option<String>,
}

impl ListSummary {
    pub fn new(list: &TodoList, index: usize) -> Self {
        Self {
            index,
            name: list.name.clone(),
            complete: is_list_complete(list),
            remaining: completion_ratio_text(list),
            class: list_class(list).map(str::to_string),
        }
    }
}

/// A task as shown inside a list view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskView {
    /// Storage position; use it to address the task.
    pub index: usize,
    pub name: String,
    pub completed: bool,
}

impl TaskView {
    pub fn new(task: &Task, index: usize) -> Self {
        Self {
            index,
            name: task.name.clone(),
            completed: task.completed,
        }
    }
}

/// A single list with its tasks in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListDetail {
    #[serde(flatten)]
    pub summary: ListSummary,
    pub todos: Vec<TaskView>,
}

impl ListDetail {
    pub fn new(list: &TodoList, index: usize) -> Self {
        Self {
            summary: ListSummary::new(list, index),
            todos: sorted_tasks(&list.todos)
                .into_iter()
                .map(|(task, i)| TaskView::new(task, i))
                .collect(),
        }
    }
}
