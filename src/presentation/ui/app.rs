//! Main application loop.

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{debug, info, warn};

use crate::domain::ports::RenderableComponent;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::RootView;
use crate::presentation::widgets::NodeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Terminal application drawing the root view until a quit key.
pub struct App {
    state: AppState,
    root: RootView,
    theme: Theme,
    container_max_width: u16,
}

impl App {
    /// Creates the app around `root`.
    #[must_use]
    pub fn new(root: RootView, theme: Theme) -> Self {
        Self {
            state: AppState::Running,
            root,
            theme,
            container_max_width: NodeView::DEFAULT_CONTAINER_MAX_WIDTH,
        }
    }

    /// Caps the layout container width.
    #[must_use]
    pub const fn with_container_max_width(mut self, width: u16) -> Self {
        self.container_max_width = width;
        self
    }

    /// Runs the draw/event loop.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal or reading its events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let Some(event) = terminal_events.next().await else {
                warn!("Terminal event stream closed");
                break;
            };

            match self.handle_terminal_event(event?) {
                EventResult::Exit => self.state = AppState::Exiting,
                EventResult::Continue => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                EventResult::Consumed => {}
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn handle_terminal_event(&self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if EventHandler::is_quit_event(&key) {
                    EventResult::Exit
                } else {
                    EventResult::Consumed
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                EventResult::Continue
            }
            _ => EventResult::Consumed,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [content_area, footer_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let tree = self.root.render();
        debug!(nodes = tree.descendant_count(), "Rendering view tree");

        let view = NodeView::new(&tree, &self.theme).container_max_width(self.container_max_width);
        frame.render_widget(&view, content_area);

        let footer = Line::from(vec![
            Span::styled(" q ", self.theme.card_title),
            Span::styled("quit", self.theme.muted),
            Span::raw("  "),
            Span::styled(format!("v{}", crate::VERSION), self.theme.muted),
        ]);
        frame.render_widget(Paragraph::new(footer), footer_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TodoItem;
    use crate::presentation::widgets::{Greeting, TodoListCard};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let root = RootView::new(
            Box::new(Greeting::new("Hello world!")),
            Box::new(TodoListCard::new(vec![
                TodoItem::new("water the roses"),
                TodoItem::new("watch jupiter").completed(),
            ])),
        );
        App::new(root, Theme::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new_with_kind(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ))
    }

    #[test]
    fn test_quit_key_exits() {
        assert_eq!(app().handle_terminal_event(key(KeyCode::Char('q'))), EventResult::Exit);
        assert_eq!(app().handle_terminal_event(key(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn test_other_keys_are_consumed() {
        assert_eq!(
            app().handle_terminal_event(key(KeyCode::Char('x'))),
            EventResult::Consumed
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(app().handle_terminal_event(release), EventResult::Consumed);
    }

    #[test]
    fn test_resize_requests_redraw() {
        assert_eq!(
            app().handle_terminal_event(Event::Resize(100, 30)),
            EventResult::Continue
        );
    }

    #[test]
    fn test_draws_full_view() {
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        let app = app();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buf = terminal.backend().buffer();
        let rows: Vec<String> = (0..10u16)
            .map(|y| (0..80u16).map(|x| buf[(x, y)].symbol()).collect())
            .collect();

        assert_eq!(rows[0].trim(), "Hello world!");
        assert!(rows[1].contains("┌ Todo "));
        assert!(rows[2].contains("[ ] water the roses"));
        assert!(rows[3].contains("[x] watch jupiter"));
        assert!(rows[5].starts_with("All the roses are red, and jupiter Todo"));
        assert!(rows[9].contains("quit"));
    }
}
