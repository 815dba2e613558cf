//! Page state: the single object the shell passes around.
//!
//! Bundles the index, manual expansion state, theme and search controller,
//! and routes every user action through them onto a surface. Holds no
//! global state, so tests drive it with a `MemorySurface`.

use super::{
    BulkAction, ExpansionStore, KeyPress, SearchController, SearchView, StatusLabels, Theme,
    ThemeState,
};
use crate::model::DocIndex;
use crate::persist::{self, RestoreReport, ThemeStore};
use crate::surface::RenderSurface;
use tracing::{debug, info};

/// Construction options for [`PageState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Status texts.
    pub labels: StatusLabels,
    /// Focus-search shortcut key.
    pub search_shortcut: char,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            labels: StatusLabels::default(),
            search_shortcut: super::DEFAULT_SEARCH_SHORTCUT,
        }
    }
}

/// Everything the documentation page knows at runtime.
#[derive(Debug, Clone)]
pub struct PageState {
    index: DocIndex,
    expansion: ExpansionStore,
    controller: SearchController,
    theme: ThemeState,
}

impl PageState {
    /// Fresh page: all sections closed, no query, no theme chosen.
    pub fn new(index: DocIndex, options: PageOptions) -> Self {
        let expansion = ExpansionStore::for_index(&index);
        let controller = SearchController::new(&index, options.labels, options.search_shortcut);
        Self {
            index,
            expansion,
            controller,
            theme: ThemeState::default(),
        }
    }

    /// Replace the theme state (typically restored from a store).
    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = theme;
        self
    }

    /// The section tree.
    pub fn index(&self) -> &DocIndex {
        &self.index
    }

    /// Manual expansion state.
    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    /// Current search view.
    pub fn view(&self) -> &SearchView {
        self.controller.view()
    }

    /// Current theme state.
    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    /// Key that focuses the search input.
    pub fn search_shortcut(&self) -> char {
        self.controller.shortcut()
    }

    /// Open the sections listed in an address fragment.
    pub fn restore_fragment(&mut self, fragment: &str) -> RestoreReport {
        let report = persist::decode_into(fragment, &self.index, &mut self.expansion);
        info!(
            opened = report.opened,
            skipped = report.skipped.len(),
            "Restored open sections"
        );
        report
    }

    /// Address fragment for the manual open state.
    pub fn fragment(&self) -> Option<String> {
        persist::encode(&self.index, &self.expansion)
    }

    /// Write the complete current state to a surface.
    pub fn mount<S>(&self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        self.controller.project(&self.index, &self.expansion, surface);
    }

    /// The query input changed.
    pub fn query_changed<S>(&mut self, surface: &mut S, raw: &str)
    where
        S: RenderSurface + ?Sized,
    {
        self.controller
            .on_query_change(&self.index, &self.expansion, surface, raw);
    }

    /// The clear control was activated.
    pub fn clear_query<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface + ?Sized,
    {
        self.controller
            .on_clear(&self.index, &self.expansion, surface);
    }

    /// A key was pressed outside the query input's own handling.
    pub fn focus_shortcut<S>(&self, surface: &mut S, event: &KeyPress) -> bool
    where
        S: RenderSurface + ?Sized,
    {
        self.controller.on_focus_shortcut(surface, event)
    }

    /// The reader expanded or collapsed one section.
    pub fn toggle_section<S>(&mut self, surface: &mut S, section: usize)
    where
        S: RenderSurface + ?Sized,
    {
        let open = self.expansion.toggle(section);
        debug!(section = section, open = open, "Section toggled");
        self.controller
            .refresh_expansion(&self.index, &self.expansion, surface);
    }

    /// A bulk open/close action was triggered.
    pub fn bulk<S>(&mut self, surface: &mut S, action: BulkAction)
    where
        S: RenderSurface + ?Sized,
    {
        self.expansion.apply_bulk(&self.index, action);
        debug!(?action, "Bulk expansion applied");
        self.controller
            .refresh_expansion(&self.index, &self.expansion, surface);
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self, store: &mut dyn ThemeStore) -> Theme {
        self.theme.toggle(store)
    }
}
