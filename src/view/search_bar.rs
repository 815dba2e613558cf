//! Search bar widget.

use super::styles::Palette;
use crate::surface::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Longest suffix of `text` whose display width fits in `width` columns.
///
/// Keeps the end of a long query (where typing happens) in view.
pub fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (offset, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[offset + ch.len_utf8()..];
        }
    }
    text
}

/// Renders the query input with its clear hint.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    clear_visible: bool,
    shortcut: char,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    /// Widget over the surface's input state.
    pub fn new(
        input: &'a SearchInput,
        clear_visible: bool,
        shortcut: char,
        palette: &'a Palette,
    ) -> Self {
        Self {
            input,
            clear_visible,
            shortcut,
            palette,
        }
    }

    fn content(&self, width: usize) -> Line<'a> {
        let value = self.input.value();
        if value.is_empty() && !self.input.is_focused() {
            return Line::from(Span::styled(
                format!("press {} to search", self.shortcut),
                self.palette.muted,
            ));
        }

        let text_style = if self.input.is_selected() {
            self.palette.base.add_modifier(Modifier::REVERSED)
        } else {
            self.palette.base
        };
        // One column stays free for the cursor.
        let shown = visible_tail(value, width.saturating_sub(1));
        let mut spans = vec![Span::styled(shown.to_string(), text_style)];
        if self.input.is_focused() {
            spans.push(Span::styled(
                " ",
                self.palette.base.add_modifier(Modifier::REVERSED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.input.is_focused() {
            self.palette.focus
        } else {
            self.palette.muted
        };
        let mut block = Block::bordered()
            .title(" Search ")
            .border_style(border)
            .style(self.palette.base);
        if self.clear_visible {
            block = block.title(Line::from(" Esc: clear ").right_aligned());
        }

        let inner_width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(self.content(inner_width))
            .block(block)
            .render(area, buf);
    }
}
