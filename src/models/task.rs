use serde::{Deserialize, Deserializer, Serialize};

/// A unit of work inside a [`TodoList`](super::TodoList).
///
/// Tasks are identified by position only. `completed` is always present and
/// starts out `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// A new, incomplete task.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// Input for adding a task to a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub todo: String,
}

/// Input for toggling a task.
///
/// `completed` is the state the client last displayed. The new state is its
/// negation unless the server is configured to trust its own copy. A JSON
/// bool or string is accepted; a missing or null value reads as not shown
/// completed, so the toggle marks the task done.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleTaskInput {
    #[serde(default, deserialize_with = "shown_state")]
    pub completed: String,
}

fn shown_state<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shown {
        Flag(bool),
        Text(String),
    }

    Ok(match Option::<Shown>::deserialize(deserializer)? {
        Some(Shown::Flag(flag)) => flag.to_string(),
        Some(Shown::Text(text)) => text,
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(body: &str) -> String {
        serde_json::from_str::<ToggleTaskInput>(body).unwrap().completed
    }

    #[test]
    fn toggle_input_accepts_strings() {
        assert_eq!(shown(r#"{"completed": "true"}"#), "true");
        assert_eq!(shown(r#"{"completed": "false"}"#), "false");
    }

    #[test]
    fn toggle_input_accepts_bools() {
        assert_eq!(shown(r#"{"completed": true}"#), "true");
        assert_eq!(shown(r#"{"completed": false}"#), "false");
    }

    #[test]
    fn toggle_input_treats_missing_and_null_as_unshown() {
        assert_eq!(shown("{}"), "");
        assert_eq!(shown(r#"{"completed": null}"#), "");
    }

    #[test]
    fn toggle_input_rejects_other_types() {
        assert!(serde_json::from_str::<ToggleTaskInput>(r#"{"completed": 1}"#).is_err());
    }
}
