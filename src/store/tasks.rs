//! Operations over one list's ordered tasks.

use crate::error::{PositionKind, Result, TodoError};
use crate::models::{Task, TodoList};
use crate::validation::validate_task_name;

use super::ToggleMode;

/// Resolve a task by position.
pub fn task(list: &TodoList, index: usize) -> Result<&Task> {
    list.todos.get(index).ok_or(TodoError::IndexOutOfRange {
        kind: PositionKind::Task,
        index,
    })
}

fn task_mut(list: &mut TodoList, index: usize) -> Result<&mut Task> {
    list.todos.get_mut(index).ok_or(TodoError::IndexOutOfRange {
        kind: PositionKind::Task,
        index,
    })
}

/// Append a new, incomplete task.
pub fn add_task(list: &mut TodoList, name: &str) -> Result<()> {
    validate_task_name(name)?;
    list.todos.push(Task::new(name));
    Ok(())
}

/// Toggle a task from the state the client says it showed.
///
/// Only the exact string `"true"` counts as completed; anything else is
/// treated as not completed. Returns the new value.
pub fn toggle_task(list: &mut TodoList, index: usize, client_completed: &str) -> Result<bool> {
    toggle_task_with(list, index, client_completed, ToggleMode::ClientAsserted)
}

/// Toggle a task using the given source of truth for its current state.
pub fn toggle_task_with(
    list: &mut TodoList,
    index: usize,
    client_completed: &str,
    mode: ToggleMode,
) -> Result<bool> {
    let task = task_mut(list, index)?;
    let current = match mode {
        ToggleMode::ClientAsserted => client_completed == "true",
        ToggleMode::ServerState => task.completed,
    };
    task.completed = !current;
    Ok(task.completed)
}

/// Remove the task at `index`, returning its name. Later tasks shift down.
pub fn delete_task(list: &mut TodoList, index: usize) -> Result<String> {
    task(list, index)?;
    Ok(list.todos.remove(index).name)
}

/// Mark every task in the list completed.
pub fn complete_all(list: &mut TodoList) -> Result<()> {
    if list.todos.is_empty() {
        return Err(TodoError::EmptyList);
    }
    for task in &mut list.todos {
        task.completed = true;
    }
    Ok(())
}
