//! Domain layer with the view tree, grid model and component port.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Responsive grid model.
pub mod grid;
/// View tree.
pub mod node;
/// Port definitions.
pub mod ports;

pub use entities::TodoItem;
pub use errors::GridError;
pub use grid::{Breakpoint, GRID_COLUMNS, Placement, ResponsiveConfig, place_columns};
pub use node::{ChecklistEntry, Node, TextAlign, Tone};
pub use ports::RenderableComponent;
