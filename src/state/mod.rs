//! UI state (pure).
//!
//! All state transitions are plain functions over owned data, testable
//! without a terminal.

pub mod controller;
pub mod expansion;
pub mod page;
pub mod search;
pub mod theme;

// Re-export for convenience
pub use controller::{
    ElementTag, FocusTarget, KeyPress, SearchController, DEFAULT_SEARCH_SHORTCUT,
};
pub use expansion::{BulkAction, ExpansionStore};
pub use page::{PageOptions, PageState};
pub use search::{reduce, SearchView, StatusIndicator, StatusLabels};
pub use theme::{Theme, ThemeState, UnknownTheme};
