//! Theme palettes for the terminal view.

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colors on unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("NO_COLOR").is_none())
    }

    /// Explicit setting.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every element of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background and default text.
    pub base: Style,
    /// Secondary text (kinds, hrefs, hints).
    pub muted: Style,
    /// Section titles.
    pub section: Style,
    /// Matched label segments.
    pub matched: Style,
    /// Border of the focused search bar.
    pub focus: Style,
    /// Status text when entries match.
    pub found: Style,
    /// Status text when nothing matches.
    pub not_found: Style,
    /// Selected row.
    pub selected: Style,
}

impl Palette {
    /// Palette for `theme`, or a monochrome one when colors are off.
    pub fn for_theme(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            Theme::Dark => Self {
                base: Style::default().fg(Color::Gray).bg(Color::Black),
                muted: Style::default().fg(Color::DarkGray),
                section: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                matched: Style::default().fg(Color::Black).bg(Color::Yellow),
                focus: Style::default().fg(Color::Cyan),
                found: Style::default().fg(Color::Green),
                not_found: Style::default().fg(Color::Red),
                selected: Style::default().bg(Color::DarkGray),
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                muted: Style::default().fg(Color::Gray),
                section: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                matched: Style::default().fg(Color::Black).bg(Color::LightYellow),
                focus: Style::default().fg(Color::Blue),
                found: Style::default().fg(Color::Green),
                not_found: Style::default().fg(Color::Red),
                selected: Style::default().bg(Color::Gray),
            },
        }
    }

    fn monochrome() -> Self {
        Self {
            base: Style::default(),
            muted: Style::default().add_modifier(Modifier::DIM),
            section: Style::default().add_modifier(Modifier::BOLD),
            matched: Style::default().add_modifier(Modifier::REVERSED),
            focus: Style::default().add_modifier(Modifier::BOLD),
            found: Style::default(),
            not_found: Style::default().add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}
