//! Key help footer.

use super::styles::Palette;
use ratatui::text::{Line, Span};

const BINDINGS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("Enter", "toggle"),
    ("o/c", "open/close all"),
    ("s", "steps"),
    ("t", "troubles"),
    ("T", "theme"),
    ("q", "quit"),
];

/// One-line key summary; `shortcut` is the focus-search key.
pub fn help_line(shortcut: char, palette: &Palette) -> Line<'static> {
    let search = (shortcut.to_string(), "search");
    let pairs = std::iter::once(search).chain(
        BINDINGS
            .iter()
            .map(|(key, action)| ((*key).to_string(), *action)),
    );

    let mut spans = Vec::new();
    for (key, action) in pairs {
        if !spans.is_empty() {
            spans.push(Span::styled("  ", palette.muted));
        }
        spans.push(Span::styled(key, palette.section));
        spans.push(Span::styled(format!(" {action}"), palette.muted));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Theme;
    use crate::view::styles::ColorConfig;

    #[test]
    fn help_starts_with_configured_shortcut() {
        let palette = Palette::for_theme(Theme::Dark, ColorConfig::new(false));
        let text: String = help_line('?', &palette)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.starts_with("? search"), "got {text:?}");
        assert!(text.contains("q quit"));
    }
}
