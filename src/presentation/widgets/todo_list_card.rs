//! Todo list card widget.

use crate::domain::entities::TodoItem;
use crate::domain::node::{ChecklistEntry, Node, TextAlign, Tone};
use crate::domain::ports::RenderableComponent;

const CARD_TITLE: &str = "Todo";
const EMPTY_MESSAGE: &str = "No items yet!";

/// Card listing todo items as a checklist.
#[derive(Debug, Clone, Default)]
pub struct TodoListCard {
    items: Vec<TodoItem>,
}

impl TodoListCard {
    /// Creates a card for `items`, kept in the given order.
    #[must_use]
    pub const fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Returns the listed items.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }
}

impl RenderableComponent for TodoListCard {
    fn name(&self) -> &'static str {
        "TodoListCard"
    }

    fn render(&self) -> Node {
        let body = if self.items.is_empty() {
            Node::Text {
                content: EMPTY_MESSAGE.to_string(),
                align: TextAlign::Center,
                tone: Tone::Muted,
            }
        } else {
            Node::Checklist(
                self.items
                    .iter()
                    .map(|item| ChecklistEntry::new(item.name.as_str(), item.completed))
                    .collect(),
            )
        };

        Node::Card {
            title: Some(CARD_TITLE.to_string()),
            children: vec![body],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_card_shows_placeholder() {
        let node = TodoListCard::default().render();
        assert_eq!(
            node,
            Node::Card {
                title: Some("Todo".to_string()),
                children: vec![Node::Text {
                    content: "No items yet!".to_string(),
                    align: TextAlign::Center,
                    tone: Tone::Muted,
                }],
            }
        );
    }

    #[test]
    fn test_items_become_checklist_in_order() {
        let card = TodoListCard::new(vec![
            TodoItem::new("water the roses"),
            TodoItem::new("watch jupiter").completed(),
        ]);

        let node = card.render();
        assert_eq!(
            node.children(),
            &[Node::Checklist(vec![
                ChecklistEntry::new("water the roses", false),
                ChecklistEntry::new("watch jupiter", true),
            ])]
        );
        assert_eq!(card.items().len(), 2);
    }
}
