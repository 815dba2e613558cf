//! Page layout: search bar, status line, section tree and key help.

use super::constants::{
    CLOSED_MARKER, ENTRY_INDENT, FOOTER_HEIGHT, OPEN_MARKER, SEARCH_BAR_HEIGHT,
    SELECTION_SYMBOL, STATUS_LINE_HEIGHT,
};
use super::help::help_line;
use super::rows::{Cursor, Row};
use super::search_bar::SearchBar;
use super::styles::Palette;
use crate::model::{DocIndex, EntryPos};
use crate::state::{StatusIndicator, Theme};
use crate::surface::MemorySurface;
use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Everything one frame needs.
pub struct Screen<'a> {
    /// Section tree.
    pub index: &'a DocIndex,
    /// Projected search state.
    pub surface: &'a MemorySurface,
    /// Visible tree rows.
    pub rows: &'a [Row],
    /// Selected row.
    pub cursor: Cursor,
    /// Active styles.
    pub palette: Palette,
    /// Theme shown in the status line.
    pub theme: Theme,
    /// Focus-search key.
    pub shortcut: char,
}

/// Draw the whole page.
pub fn render_page(frame: &mut Frame, screen: &Screen<'_>) {
    let [search_area, status_area, tree_area, footer_area] = Layout::vertical([
        Constraint::Length(SEARCH_BAR_HEIGHT),
        Constraint::Length(STATUS_LINE_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(frame.area());

    frame.render_widget(Block::default().style(screen.palette.base), frame.area());

    if let Some(input) = screen.surface.input() {
        let clear_visible = screen.surface.clear().is_some_and(|c| c.is_visible());
        frame.render_widget(
            SearchBar::new(input, clear_visible, screen.shortcut, &screen.palette),
            search_area,
        );
    }

    frame.render_widget(Paragraph::new(status_line(screen)), status_area);

    let items: Vec<ListItem> = screen
        .rows
        .iter()
        .map(|row| ListItem::new(row_line(screen, *row)))
        .collect();
    let list = List::new(items)
        .highlight_style(screen.palette.selected)
        .highlight_symbol(SELECTION_SYMBOL);
    let mut state = ListState::default();
    if !screen.rows.is_empty() {
        state.select(Some(screen.cursor.selected()));
    }
    frame.render_stateful_widget(list, tree_area, &mut state);

    frame.render_widget(
        Paragraph::new(help_line(screen.shortcut, &screen.palette)),
        footer_area,
    );
}

fn status_line<'a>(screen: &Screen<'a>) -> Line<'a> {
    let mut spans = Vec::new();
    if let Some(status) = screen.surface.status() {
        let style = match status.indicator() {
            StatusIndicator::Found(_) => screen.palette.found,
            StatusIndicator::NotFound => screen.palette.not_found,
            StatusIndicator::Empty => screen.palette.muted,
        };
        spans.push(Span::styled(format!(" {}", status.text()), style));
    }
    spans.push(Span::styled(
        format!("  [{}]", screen.theme),
        screen.palette.muted,
    ));
    Line::from(spans)
}

fn row_line<'a>(screen: &Screen<'a>, row: Row) -> Line<'a> {
    match row {
        Row::Section(section) => section_line(screen, section),
        Row::Entry(pos) => entry_line(screen, pos),
    }
}

fn section_line<'a>(screen: &Screen<'a>, section: usize) -> Line<'a> {
    let Some(content) = screen.index.sections().get(section) else {
        return Line::default();
    };
    let marker = if screen.surface.is_section_open(section) {
        OPEN_MARKER
    } else {
        CLOSED_MARKER
    };
    Line::from(vec![
        Span::styled(format!("{marker} "), screen.palette.muted),
        Span::styled(content.title().to_string(), screen.palette.section),
        Span::styled(format!("  {}", content.kind().as_str()), screen.palette.muted),
    ])
}

fn entry_line<'a>(screen: &Screen<'a>, pos: EntryPos) -> Line<'a> {
    let mut spans = vec![Span::raw(ENTRY_INDENT)];
    spans.extend(screen.surface.entry_label(pos).iter().map(|segment| {
        let style = if segment.is_matched() {
            screen.palette.matched
        } else {
            screen.palette.base
        };
        Span::styled(segment.text().to_string(), style)
    }));
    if let Some(href) = screen.index.entry(pos).and_then(|e| e.href()) {
        spans.push(Span::styled(format!("  {href}"), screen.palette.muted));
    }
    Line::from(spans)
}
