//! Immutable view tree.

use crate::domain::grid::{Breakpoint, ResponsiveConfig};
use crate::domain::ports::RenderableComponent;

/// Horizontal placement of text inside its area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered.
    Center,
}

/// Emphasis of a text node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// Regular text.
    #[default]
    Normal,
    /// De-emphasized text.
    Muted,
}

/// One line of a checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    /// Entry label.
    pub label: String,
    /// Whether the entry is ticked.
    pub checked: bool,
}

impl ChecklistEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }
}

/// Description of a renderable element.
///
/// Nodes are plain values: a tree is rebuilt on every render pass and
/// compared structurally, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Siblings with no wrapping element.
    Fragment(Vec<Node>),
    /// Centered, width-capped layout container.
    Container(Vec<Node>),
    /// Grid row.
    Row(Vec<Node>),
    /// Grid cell sized in units once `breakpoint` is reached.
    Column {
        /// Breakpoint at which `config` applies.
        breakpoint: Breakpoint,
        /// Offset and span in grid units.
        config: ResponsiveConfig,
        /// Cell content, top to bottom.
        children: Vec<Node>,
    },
    /// Output of a mounted child component.
    Component {
        /// Component name.
        name: &'static str,
        /// What the component rendered.
        body: Box<Node>,
    },
    /// Section heading.
    Heading {
        /// Heading rank, 1 being the most prominent.
        level: u8,
        /// Heading text.
        text: String,
        /// Alignment.
        align: TextAlign,
    },
    /// Paragraph of text.
    Text {
        /// Text content.
        content: String,
        /// Alignment.
        align: TextAlign,
        /// Emphasis.
        tone: Tone,
    },
    /// Bordered card.
    Card {
        /// Title drawn on the top border.
        title: Option<String>,
        /// Card body, top to bottom.
        children: Vec<Node>,
    },
    /// Ticked/unticked entries.
    Checklist(Vec<ChecklistEntry>),
}

impl Node {
    /// Renders `component` and wraps its output under the component's name.
    #[must_use]
    pub fn mount(component: &dyn RenderableComponent) -> Self {
        Self::Component {
            name: component.name(),
            body: Box::new(component.render()),
        }
    }

    /// Creates a heading.
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
            align: TextAlign::Left,
        }
    }

    /// Creates a left-aligned, normal-tone text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            align: TextAlign::Left,
            tone: Tone::Normal,
        }
    }

    /// Direct children in order. Leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Fragment(children)
            | Self::Container(children)
            | Self::Row(children)
            | Self::Column { children, .. }
            | Self::Card { children, .. } => children,
            Self::Component { body, .. } => std::slice::from_ref(body.as_ref()),
            Self::Heading { .. } | Self::Text { .. } | Self::Checklist(_) => &[],
        }
    }

    /// Text of the whole subtree in document order, one fragment per line.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out.join("\n")
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Heading { text, .. } => out.push(text),
            Self::Text { content, .. } => out.push(content),
            Self::Card { title, children } => {
                if let Some(title) = title {
                    out.push(title);
                }
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Checklist(entries) => out.extend(entries.iter().map(|e| e.label.as_str())),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Number of nodes below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Fragment(vec![
            Node::Container(vec![Node::Row(vec![Node::Column {
                breakpoint: Breakpoint::Md,
                config: ResponsiveConfig::FULL,
                children: vec![
                    Node::heading(1, "Hi"),
                    Node::Card {
                        title: Some("List".to_string()),
                        children: vec![Node::Checklist(vec![
                            ChecklistEntry::new("a", false),
                            ChecklistEntry::new("b", true),
                        ])],
                    },
                ],
            }])]),
            Node::text("tail"),
        ])
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        assert!(Node::text("x").children().is_empty());
        assert!(Node::Checklist(Vec::new()).children().is_empty());
    }

    #[test]
    fn test_component_exposes_body_as_single_child() {
        let node = Node::Component {
            name: "Thing",
            body: Box::new(Node::text("body")),
        };
        assert_eq!(node.children(), &[Node::text("body")]);
    }

    #[test]
    fn test_text_content_in_document_order() {
        assert_eq!(sample().text_content(), "Hi\nList\na\nb\ntail");
    }

    #[test]
    fn test_descendant_count() {
        // container, row, column, heading, card, checklist, text
        assert_eq!(sample().descendant_count(), 7);
    }

    #[test]
    fn test_clone_is_structurally_equal() {
        let node = sample();
        assert_eq!(node.clone(), node);
    }
}
