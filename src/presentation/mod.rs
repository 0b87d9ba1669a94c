//! Presentation layer with the view composition, widgets and event handling.

/// Event handling.
pub mod events;
/// Styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use theme::Theme;
pub use ui::{App, RootView};
