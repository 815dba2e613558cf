//! Search controller.
//!
//! Glue between input events, the pure reducer and a rendering surface.
//! Every query change recomputes the full view and re-projects it; there is
//! no incremental state to go stale between keystrokes.

use super::search::{reduce, SearchView, StatusLabels};
use super::ExpansionStore;
use crate::model::DocIndex;
use crate::surface::RenderSurface;
use tracing::debug;

/// Default key that moves focus to the search input.
pub const DEFAULT_SEARCH_SHORTCUT: char = '/';

// ===== Focus targets =====

/// Kind of element that currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    /// Single-line text input.
    Input,
    /// Multi-line text area.
    TextArea,
    /// Drop-down select.
    Select,
    /// Anything else (links, buttons, list rows).
    Other,
}

/// The focused element as seen by the shortcut handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTarget {
    /// Element kind.
    pub tag: ElementTag,
    /// Whether the element is marked content-editable.
    pub content_editable: bool,
}

impl FocusTarget {
    /// A plain element of the given kind.
    pub fn new(tag: ElementTag) -> Self {
        Self {
            tag,
            content_editable: false,
        }
    }

    /// Whether typing into this element would produce text.
    pub fn is_editable(&self) -> bool {
        self.content_editable
            || matches!(
                self.tag,
                ElementTag::Input | ElementTag::TextArea | ElementTag::Select
            )
    }
}

/// A key press delivered to the shortcut handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The character produced by the key.
    pub key: char,
    /// Focused element, `None` when focus is on the page itself.
    pub target: Option<FocusTarget>,
}

// ===== SearchController =====

/// Owns the current [`SearchView`] and projects it onto a surface.
#[derive(Debug, Clone)]
pub struct SearchController {
    view: SearchView,
    labels: StatusLabels,
    shortcut: char,
}

impl SearchController {
    /// Controller for `index` with no active query.
    pub fn new(index: &DocIndex, labels: StatusLabels, shortcut: char) -> Self {
        Self {
            view: reduce(index, ""),
            labels,
            shortcut,
        }
    }

    /// The current view.
    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Status texts in use.
    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }

    /// Key that focuses the search input.
    pub fn shortcut(&self) -> char {
        self.shortcut
    }

    /// Recompute everything for `raw` input and write it to `surface`.
    pub fn on_query_change<S>(
        &mut self,
        index: &DocIndex,
        expansion: &ExpansionStore,
        surface: &mut S,
        raw: &str,
    ) where
        S: RenderSurface + ?Sized,
    {
        self.view = reduce(index, raw);
        debug!(
            query = %self.view.query(),
            match_count = self.view.match_count(),
            "Search recomputed"
        );
        self.project(index, expansion, surface);
    }

    /// Empty the query, re-run the search and focus the input.
    pub fn on_clear<S>(&mut self, index: &DocIndex, expansion: &ExpansionStore, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        if let Some(input) = surface.search_input() {
            input.set_value("");
        }
        self.on_query_change(index, expansion, surface, "");
        if let Some(input) = surface.search_input() {
            input.focus();
        }
    }

    /// Handle the focus shortcut; returns `true` if the key was consumed.
    ///
    /// Never fires while focus is inside an editable element, so the key can
    /// still be typed there. Does nothing if the surface has no input.
    pub fn on_focus_shortcut<S>(&self, surface: &mut S, event: &KeyPress) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        if event.key != self.shortcut || event.target.is_some_and(|t| t.is_editable()) {
            return false;
        }
        match surface.search_input() {
            Some(input) => {
                input.focus();
                input.select_all();
                true
            }
            None => false,
        }
    }

    /// Re-write section open flags after the manual state changed.
    pub fn refresh_expansion<S>(&self, index: &DocIndex, expansion: &ExpansionStore, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let active = self.view.query().is_active();
        for section in 0..index.section_count() {
            surface.set_section_open(section, expansion.effective_open(section, active));
        }
    }

    /// Write the whole current view to `surface`.
    ///
    /// Order: entry visibility and labels, section visibility, open flags,
    /// then the status line and clear control.
    pub fn project<S>(&self, index: &DocIndex, expansion: &ExpansionStore, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        let cascade = self.view.cascade();

        for (pos, _) in index.entries() {
            surface.set_entry_hidden(pos, !cascade.entry_visible(pos));
            surface.set_entry_label(pos, self.view.label(pos));
        }

        for section in 0..index.section_count() {
            surface.set_section_hidden(section, !cascade.section_visible(section));
        }

        self.refresh_expansion(index, expansion, surface);

        let indicator = self.view.status();
        if let Some(status) = surface.status_line() {
            status.set(indicator, self.labels.text(indicator));
        }

        let active = self.view.query().is_active();
        if let Some(clear) = surface.clear_control() {
            clear.set_visible(active);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
