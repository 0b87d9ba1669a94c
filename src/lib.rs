//! jupiter-todo - a terminal todo board on a responsive grid.
//!
//! The view is a tree of immutable [`domain::Node`] values rebuilt on every
//! render pass by [`presentation::RootView`] and painted with ratatui.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Domain layer containing the view tree, grid model and component port.
pub mod domain;
/// Infrastructure layer containing configuration loading.
pub mod infrastructure;
/// Presentation layer containing widgets, the root view and the event loop.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "jupiter-todo";
