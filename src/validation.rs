//! Name checks shared by the list and task stores.
//!
//! Validators expect input that has already been through [`normalize_name`].
//! Trimming first means a name made only of whitespace fails the length check.

use crate::error::{NameSubject, Result, TodoError};
use crate::models::TodoList;

/// Shortest accepted name, in characters.
pub const MIN_NAME_LEN: usize = 1;
/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Strip leading and trailing whitespace from user input.
pub fn normalize_name(raw: &str) -> &str {
    raw.trim()
}

fn check_length(name: &str, subject: NameSubject) -> Result<()> {
    let len = name.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(TodoError::InvalidLength { subject })
    }
}

/// Validate a list name against the lists it must stay distinct from.
///
/// The length check runs first, so an empty name reports `InvalidLength`
/// even when an empty-named list somehow exists.
pub fn validate_list_name<'a, I>(name: &str, existing: I) -> Result<()>
where
    I: IntoIterator<Item = &'a TodoList>,
{
    check_length(name, NameSubject::List)?;

    if existing.into_iter().any(|list| list.name == name) {
        return Err(TodoError::DuplicateName);
    }

    Ok(())
}

/// Validate a task name. Task names need not be unique.
pub fn validate_task_name(name: &str) -> Result<()> {
    check_length(name, NameSubject::Task)
}
