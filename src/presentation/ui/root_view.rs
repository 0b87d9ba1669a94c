//! Top-level view composition.

use crate::domain::grid::{Breakpoint, ResponsiveConfig};
use crate::domain::node::Node;
use crate::domain::ports::RenderableComponent;

/// Text of the heading rendered below the container.
pub const HEADING_TEXT: &str = "All the roses are red, and jupiter Todo";

const HEADING_LEVEL: u8 = 3;

/// Middle half of the row from the medium breakpoint up.
pub const CARD_COLUMN: ResponsiveConfig = match ResponsiveConfig::new(3, 6) {
    Ok(config) => config,
    Err(_) => panic!("card column must fit the grid"),
};

/// Root of the view: greeting and todo card in a centered column, then the heading.
pub struct RootView {
    greeting: Box<dyn RenderableComponent>,
    todo_list_card: Box<dyn RenderableComponent>,
}

impl RootView {
    /// Composes the root view from its two child components.
    #[must_use]
    pub fn new(
        greeting: Box<dyn RenderableComponent>,
        todo_list_card: Box<dyn RenderableComponent>,
    ) -> Self {
        Self {
            greeting,
            todo_list_card,
        }
    }
}

impl RenderableComponent for RootView {
    fn name(&self) -> &'static str {
        "RootView"
    }

    fn render(&self) -> Node {
        let column = Node::Column {
            breakpoint: Breakpoint::Md,
            config: CARD_COLUMN,
            children: vec![
                Node::mount(self.greeting.as_ref()),
                Node::mount(self.todo_list_card.as_ref()),
            ],
        };

        Node::Fragment(vec![
            Node::Container(vec![Node::Row(vec![column])]),
            Node::heading(HEADING_LEVEL, HEADING_TEXT),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockRenderableComponent;

    fn mock_component(name: &'static str, body: Node, renders: usize) -> MockRenderableComponent {
        let mut mock = MockRenderableComponent::new();
        mock.expect_name().times(renders).return_const(name);
        mock.expect_render()
            .times(renders)
            .returning(move || body.clone());
        mock
    }

    fn root_view(renders: usize) -> RootView {
        RootView::new(
            Box::new(mock_component("Greeting", Node::heading(1, "hi"), renders)),
            Box::new(mock_component("TodoListCard", Node::text("todos"), renders)),
        )
    }

    fn column(tree: &Node) -> &Node {
        let container = &tree.children()[0];
        let row = &container.children()[0];
        &row.children()[0]
    }

    #[test]
    fn test_top_level_is_container_then_heading() {
        let tree = root_view(1).render();

        assert!(matches!(tree, Node::Fragment(_)));
        let top = tree.children();
        assert_eq!(top.len(), 2);
        assert!(matches!(top[0], Node::Container(_)));
        assert!(matches!(top[1], Node::Heading { level: 3, .. }));
    }

    #[test]
    fn test_container_holds_single_row_with_single_centered_column() {
        let tree = root_view(1).render();
        let container = &tree.children()[0];

        assert_eq!(container.children().len(), 1);
        let row = &container.children()[0];
        assert!(matches!(row, Node::Row(_)));
        assert_eq!(row.children().len(), 1);

        let Node::Column {
            breakpoint, config, ..
        } = column(&tree)
        else {
            panic!("expected a column cell");
        };
        assert_eq!(*breakpoint, Breakpoint::Md);
        assert_eq!(config.offset(), 3);
        assert_eq!(config.span(), 6);
    }

    #[test]
    fn test_column_children_are_greeting_then_todo_card() {
        let tree = root_view(1).render();

        let names: Vec<&str> = column(&tree)
            .children()
            .iter()
            .map(|child| match child {
                Node::Component { name, .. } => *name,
                other => panic!("unexpected node {other:?}"),
            })
            .collect();
        assert_eq!(names, ["Greeting", "TodoListCard"]);
        assert_eq!(column(&tree).text_content(), "hi\ntodos");
    }

    #[test]
    fn test_heading_contains_literal() {
        let tree = root_view(1).render();
        assert!(tree.children()[1]
            .text_content()
            .contains("All the roses are red, and jupiter Todo"));
    }

    #[test]
    fn test_repeated_renders_are_identical() {
        let view = root_view(2);
        assert_eq!(view.render(), view.render());
    }

    #[test]
    fn test_root_view_is_itself_a_component() {
        let view = root_view(1);
        let mounted = Node::mount(&view);

        let Node::Component { name, body } = mounted else {
            panic!("expected mounted component");
        };
        assert_eq!(name, "RootView");
        assert_eq!(body.children().len(), 2);
    }
}
