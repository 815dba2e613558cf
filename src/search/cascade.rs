//! Visibility cascade.
//!
//! Derives entry visibility from match results, section visibility from
//! entry visibility, and whether sections are force-opened. Always evaluated
//! against the full index, so the result depends only on the query and never
//! on the sequence of edits that produced it.

use super::{matches, Query};
use crate::model::{DocIndex, EntryPos};

/// Per-entry and per-section visibility for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeResult {
    query_active: bool,
    match_count: usize,
    entry_visible: Vec<Vec<bool>>,
    section_visible: Vec<bool>,
}

impl CascadeResult {
    /// Number of matching entries. Always 0 for the inactive query.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Whether the entry at `pos` is shown. Unknown positions are hidden.
    pub fn entry_visible(&self, pos: EntryPos) -> bool {
        self.entry_visible
            .get(pos.section)
            .and_then(|s| s.get(pos.entry))
            .copied()
            .unwrap_or(false)
    }

    /// Whether the section at `section` is shown. Unknown positions are hidden.
    pub fn section_visible(&self, section: usize) -> bool {
        self.section_visible.get(section).copied().unwrap_or(false)
    }

    /// Whether sections are force-opened (any active query).
    pub fn forces_open(&self) -> bool {
        self.query_active
    }

    /// Number of sections still shown.
    pub fn visible_section_count(&self) -> usize {
        self.section_visible.iter().filter(|v| **v).count()
    }
}

/// Run the cascade for `query` over every entry of `index`.
///
/// Steps run in a fixed order: match each entry, derive entry visibility,
/// derive section visibility, then the force-open flag.
pub fn apply(index: &DocIndex, query: &Query) -> CascadeResult {
    let query_active = query.is_active();

    let entry_visible: Vec<Vec<bool>> = index
        .sections()
        .iter()
        .map(|section| {
            section
                .entries()
                .iter()
                .map(|entry| matches(entry, query))
                .collect()
        })
        .collect();

    let match_count = if query_active {
        entry_visible.iter().flatten().filter(|v| **v).count()
    } else {
        0
    };

    let section_visible = entry_visible
        .iter()
        .map(|entries| !query_active || entries.iter().any(|v| *v))
        .collect();

    CascadeResult {
        query_active,
        match_count,
        entry_visible,
        section_visible,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
