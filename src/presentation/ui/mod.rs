//! UI screens.

mod app;
mod root_view;

pub use app::App;
pub use root_view::{CARD_COLUMN, HEADING_TEXT, RootView};
