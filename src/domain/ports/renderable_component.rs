//! Renderable component port definition.

use crate::domain::node::Node;

/// Anything that can describe itself as a view tree without input.
#[cfg_attr(test, mockall::automock)]
pub trait RenderableComponent: Send + Sync {
    /// Stable component name, used to label its mounted output.
    fn name(&self) -> &'static str;

    /// Builds the component's view tree.
    fn render(&self) -> Node;
}
