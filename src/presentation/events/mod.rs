//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing; the screen should be redrawn.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed without visible effect.
    Consumed,
}

/// Terminal key classification.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
                ..
            } | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }
}
