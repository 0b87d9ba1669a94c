mod renderable_component;

pub use renderable_component::RenderableComponent;

#[cfg(test)]
pub mod mocks {
    pub use super::renderable_component::MockRenderableComponent;
}
