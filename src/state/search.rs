//! Search view reducer.
//!
//! `reduce` is a pure function of the index and the raw input: it normalizes
//! the query, runs the cascade and renders every label. Applying the result
//! to a surface is a separate step (see `controller`).

use crate::model::{DocIndex, EntryPos};
use crate::search::{self, CascadeResult, Query, Segment};

// ===== StatusIndicator =====

/// What the status region reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusIndicator {
    /// No query; nothing shown.
    #[default]
    Empty,
    /// Query active with this many matching entries (> 0).
    Found(usize),
    /// Query active, nothing matched.
    NotFound,
}

impl StatusIndicator {
    /// Derive the indicator from a cascade result.
    pub fn from_result(result: &CascadeResult) -> Self {
        match (result.forces_open(), result.match_count()) {
            (false, _) => Self::Empty,
            (true, 0) => Self::NotFound,
            (true, n) => Self::Found(n),
        }
    }
}

// ===== StatusLabels =====

/// Placeholder replaced by the match count in [`StatusLabels::found_template`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// User-facing status texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLabels {
    /// Text for [`StatusIndicator::Found`]; `{count}` is replaced by the count.
    pub found_template: String,
    /// Text for [`StatusIndicator::NotFound`].
    pub not_found: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            found_template: "{count} found".to_string(),
            not_found: "not found".to_string(),
        }
    }
}

impl StatusLabels {
    /// Text for an indicator.
    pub fn text(&self, indicator: StatusIndicator) -> String {
        match indicator {
            StatusIndicator::Empty => String::new(),
            StatusIndicator::Found(n) => self
                .found_template
                .replace(COUNT_PLACEHOLDER, &n.to_string()),
            StatusIndicator::NotFound => self.not_found.clone(),
        }
    }
}

// ===== SearchView =====

/// Everything derived from one query: cascade result and rendered labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchView {
    query: Query,
    cascade: CascadeResult,
    labels: Vec<Vec<Vec<Segment>>>,
}

impl SearchView {
    /// The normalized query this view was computed for.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Visibility results.
    pub fn cascade(&self) -> &CascadeResult {
        &self.cascade
    }

    /// Number of matching entries.
    pub fn match_count(&self) -> usize {
        self.cascade.match_count()
    }

    /// Status indicator for this view.
    pub fn status(&self) -> StatusIndicator {
        StatusIndicator::from_result(&self.cascade)
    }

    /// Rendered label of one entry.
    pub fn label(&self, pos: EntryPos) -> &[Segment] {
        self.labels
            .get(pos.section)
            .and_then(|s| s.get(pos.entry))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Compute the view for `raw` input over the whole of `index`.
pub fn reduce(index: &DocIndex, raw: &str) -> SearchView {
    let query = Query::parse(raw);
    let cascade = search::apply(index, &query);
    let labels = index
        .sections()
        .iter()
        .map(|section| {
            section
                .entries()
                .iter()
                .map(|entry| search::render(entry.display_label(), query.as_str()))
                .collect()
        })
        .collect();

    SearchView {
        query,
        cascade,
        labels,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
