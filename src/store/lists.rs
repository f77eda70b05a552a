//! Operations over a session's ordered lists.

use crate::error::{PositionKind, Result, TodoError};
use crate::models::TodoList;
use crate::validation::validate_list_name;

use super::DuplicateScope;

/// Resolve a list by position.
pub fn list(lists: &[TodoList], index: usize) -> Result<&TodoList> {
    lists.get(index).ok_or(TodoError::IndexOutOfRange {
        kind: PositionKind::List,
        index,
    })
}

/// Resolve a list by position for mutation.
pub fn list_mut(lists: &mut [TodoList], index: usize) -> Result<&mut TodoList> {
    lists.get_mut(index).ok_or(TodoError::IndexOutOfRange {
        kind: PositionKind::List,
        index,
    })
}

/// Append a new, empty list.
pub fn add_list(lists: &mut Vec<TodoList>, name: &str) -> Result<()> {
    validate_list_name(name, lists.iter())?;
    lists.push(TodoList::new(name));
    Ok(())
}

/// Rename the list at `index`, returning its previous name.
///
/// The new name may equal the list's current name.
pub fn rename_list(lists: &mut [TodoList], index: usize, new_name: &str) -> Result<String> {
    rename_list_with(lists, index, new_name, DuplicateScope::ExcludeSelf)
}

/// Rename the list at `index` with an explicit duplicate-check scope.
pub fn rename_list_with(
    lists: &mut [TodoList],
    index: usize,
    new_name: &str,
    scope: DuplicateScope,
) -> Result<String> {
    list(lists, index)?;

    match scope {
        DuplicateScope::ExcludeSelf => validate_list_name(
            new_name,
            lists
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, l)| l),
        )?,
        DuplicateScope::AllLists => validate_list_name(new_name, lists.iter())?,
    }

    let target = list_mut(lists, index)?;
    Ok(std::mem::replace(&mut target.name, new_name.to_string()))
}

/// Remove the list at `index`, returning its name. Later lists shift down.
pub fn delete_list(lists: &mut Vec<TodoList>, index: usize) -> Result<String> {
    list(lists, index)?;
    Ok(lists.remove(index).name)
}
