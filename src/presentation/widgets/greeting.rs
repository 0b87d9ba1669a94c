//! Greeting widget.

use crate::domain::node::{Node, TextAlign};
use crate::domain::ports::RenderableComponent;

/// Centered welcome heading.
#[derive(Debug, Clone)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    /// Creates a greeting showing `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl RenderableComponent for Greeting {
    fn name(&self) -> &'static str {
        "Greeting"
    }

    fn render(&self) -> Node {
        if self.message.trim().is_empty() {
            return Node::Fragment(Vec::new());
        }

        Node::Heading {
            level: 1,
            text: self.message.clone(),
            align: TextAlign::Center,
        }
    }
}
