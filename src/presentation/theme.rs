//! Colors and styles used when painting view trees.

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::domain::node::Tone;
use crate::infrastructure::config::ThemeConfig;

/// Resolved styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Accent color.
    pub accent: Color,
    /// Regular text.
    pub text: Style,
    /// De-emphasized text.
    pub muted: Style,
    /// Ticked checklist entries.
    pub checked: Style,
    /// Card borders.
    pub card_border: Style,
    /// Card titles.
    pub card_title: Style,
}

impl Theme {
    /// Builds a theme around `accent`.
    #[must_use]
    pub fn with_accent(accent: Color) -> Self {
        Self {
            accent,
            text: Style::default(),
            muted: Style::default().fg(Color::DarkGray),
            checked: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            card_border: Style::default().fg(accent),
            card_title: Style::default().fg(accent).add_modifier(Modifier::BOLD),
        }
    }

    /// Builds a theme from configuration, falling back to yellow on an unknown color.
    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        let accent = config.accent_color.parse::<Color>().unwrap_or_else(|_| {
            warn!(color = %config.accent_color, "Unknown accent color, using yellow");
            Color::Yellow
        });
        Self::with_accent(accent)
    }

    /// Style for a heading of the given rank.
    #[must_use]
    pub fn heading(&self, level: u8) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if level <= 1 {
            style.fg(self.accent)
        } else {
            style
        }
    }

    /// Style for text of the given tone.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> Style {
        match tone {
            Tone::Normal => self.text,
            Tone::Muted => self.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_accent(Color::Yellow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn config(color: &str) -> ThemeConfig {
        ThemeConfig {
            accent_color: color.to_string(),
        }
    }

    #[test_case("Cyan", Color::Cyan ; "named")]
    #[test_case("#ff8800", Color::Rgb(0xff, 0x88, 0x00) ; "hex")]
    #[test_case("not-a-color", Color::Yellow ; "fallback")]
    fn test_accent_from_config(input: &str, expected: Color) {
        assert_eq!(Theme::from_config(&config(input)).accent, expected);
    }

    #[test]
    fn test_only_top_heading_uses_accent() {
        let theme = Theme::with_accent(Color::Magenta);
        assert_eq!(theme.heading(1).fg, Some(Color::Magenta));
        assert_eq!(theme.heading(3).fg, None);
        assert!(theme.heading(3).add_modifier.contains(Modifier::BOLD));
    }
}
