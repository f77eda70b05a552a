use listkeeper::models::*;
use listkeeper::ordering::*;
use speculate2::speculate;

fn task(name: &str, completed: bool) -> Task {
    Task {
        name: name.to_string(),
        completed,
    }
}

fn list(name: &str, todos: Vec<Task>) -> TodoList {
    TodoList {
        name: name.to_string(),
        todos,
    }
}

fn order(sorted: &[(&TodoList, usize)]) -> Vec<(String, usize)> {
    sorted
        .iter()
        .map(|(list, index)| (list.name.clone(), *index))
        .collect()
}

speculate! {
    describe "is_list_complete" {
        it "is false for a list with no tasks" {
            assert!(!is_list_complete(&list("Empty", vec![])));
        }

        it "is false while any task is open" {
            assert!(!is_list_complete(&list("L", vec![task("a", true), task("b", false)])));
        }

        it "is true when every task is done" {
            assert!(is_list_complete(&list("L", vec![task("a", true), task("b", true)])));
        }
    }

    describe "sorted_lists" {
        it "puts an empty list before a complete one" {
            let lists = vec![
                list("A", vec![task("x", true)]),
                list("B", vec![]),
            ];

            let sorted = sorted_lists(&lists);

            assert_eq!(order(&sorted), vec![("B".to_string(), 1), ("A".to_string(), 0)]);
        }

        it "keeps relative order within each group" {
            let lists = vec![
                list("done-1", vec![task("x", true)]),
                list("open-1", vec![task("x", false)]),
                list("done-2", vec![task("x", true), task("y", true)]),
                list("open-2", vec![]),
                list("open-3", vec![task("x", true), task("y", false)]),
            ];

            let sorted = sorted_lists(&lists);

            assert_eq!(
                order(&sorted),
                vec![
                    ("open-1".to_string(), 1),
                    ("open-2".to_string(), 3),
                    ("open-3".to_string(), 4),
                    ("done-1".to_string(), 0),
                    ("done-2".to_string(), 2),
                ]
            );
        }

        it "pairs every list with its storage position" {
            let lists = vec![
                list("c", vec![task("x", true)]),
                list("b", vec![]),
                list("a", vec![task("x", false)]),
            ];

            for (sorted, index) in sorted_lists(&lists) {
                assert_eq!(&lists[index], sorted);
            }
        }

        it "does not reorder storage" {
            let lists = vec![list("A", vec![task("x", true)]), list("B", vec![])];
            let before = lists.clone();

            let _ = sorted_lists(&lists);

            assert_eq!(lists, before);
        }

        it "returns nothing for no lists" {
            assert!(sorted_lists(&[]).is_empty());
        }
    }

    describe "sorted_tasks" {
        it "puts open tasks first and keeps their positions" {
            let todos = vec![task("a", true), task("b", false), task("c", true), task("d", false)];

            let sorted: Vec<(&str, usize)> = sorted_tasks(&todos)
                .into_iter()
                .map(|(t, i)| (t.name.as_str(), i))
                .collect();

            assert_eq!(sorted, vec![("b", 1), ("d", 3), ("a", 0), ("c", 2)]);
        }
    }

    describe "completion_ratio_text" {
        it "counts open tasks over total" {
            let l = list("L", vec![task("a", true), task("b", false)]);
            assert_eq!(completion_ratio_text(&l), "1 / 2");
        }

        it "shows zero open when everything is done" {
            let l = list("L", vec![task("a", true), task("b", true)]);
            assert_eq!(completion_ratio_text(&l), "0 / 2");
        }
    }
}
