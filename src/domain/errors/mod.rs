//! Domain error types.

mod grid_error;

pub use grid_error::GridError;
