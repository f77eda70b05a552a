//! Read-only display ordering.
//!
//! Views show unfinished work first. Nothing here reorders storage; each item
//! is paired with its original position so links built from the view still
//! address the right list or task.

use crate::models::{Task, TodoList};

/// True iff the list has at least one task and every task is completed.
pub fn is_list_complete(list: &TodoList) -> bool {
    !list.todos.is_empty() && list.todos.iter().all(|todo| todo.completed)
}

/// CSS-style class for a list row: `"complete"` for finished lists.
pub fn list_class(list: &TodoList) -> Option<&'static str> {
    is_list_complete(list).then_some("complete")
}

/// `"<incomplete> / <total>"` for a list.
///
/// The numerator is the number of tasks still open, not the number done.
pub fn completion_ratio_text(list: &TodoList) -> String {
    let total = list.todos.len();
    let remaining = list.todos.iter().filter(|todo| !todo.completed).count();
    format!("{} / {}", remaining, total)
}

/// Stable two-way partition: items failing `done` first, then the rest.
fn partition_by<T>(items: &[T], done: impl Fn(&T) -> bool) -> Vec<(&T, usize)> {
    let (finished, open): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, index))
        .partition(|&(item, _)| done(item));

    open.into_iter().chain(finished).collect()
}

/// Lists in display order: incomplete (including empty) lists, then complete
/// ones, each group in storage order.
pub fn sorted_lists(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    partition_by(lists, is_list_complete)
}

/// Tasks in display order: open tasks, then completed ones, each group in
/// storage order.
pub fn sorted_tasks(todos: &[Task]) -> Vec<(&Task, usize)> {
    partition_by(todos, |todo| todo.completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str, completed: bool) -> Task {
        Task {
            name: name.to_string(),
            completed,
        }
    }

    #[test]
    fn ratio_counts_open_tasks_over_total() {
        let mut list = TodoList::new("Chores");
        list.todos = vec![task("a", true), task("b", false), task("c", false)];
        assert_eq!(completion_ratio_text(&list), "2 / 3");
    }

    #[test]
    fn ratio_for_empty_list() {
        assert_eq!(completion_ratio_text(&TodoList::new("Empty")), "0 / 0");
    }

    #[test]
    fn list_class_only_marks_complete_lists() {
        let mut list = TodoList::new("Chores");
        assert_eq!(list_class(&list), None);

        list.todos.push(task("a", true));
        assert_eq!(list_class(&list), Some("complete"));
    }

    #[test]
    fn identical_tasks_keep_distinct_positions() {
        let todos = vec![task("same", false), task("same", false)];
        let order: Vec<usize> = sorted_tasks(&todos).into_iter().map(|(_, i)| i).collect();
        assert_eq!(order, vec![0, 1]);
    }
}
