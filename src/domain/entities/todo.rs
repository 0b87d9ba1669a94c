//! Todo item entity.

use serde::{Deserialize, Serialize};

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// What needs doing.
    pub name: String,

    /// Whether it has been done.
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates an open item.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }

    /// Marks the item as done.
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        todos: Vec<TodoItem>,
    }

    #[test]
    fn test_completed_defaults_to_false() {
        let parsed: Wrapper = toml::from_str(
            r#"
            [[todos]]
            name = "water the roses"

            [[todos]]
            name = "watch jupiter"
            completed = true
            "#,
        )
        .unwrap();

        assert_eq!(
            parsed.todos,
            vec![
                TodoItem::new("water the roses"),
                TodoItem::new("watch jupiter").completed(),
            ]
        );
    }
}
