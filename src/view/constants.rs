//! Layout constants shared by the view widgets.

/// Height of the bordered search bar.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Height of the status line.
pub const STATUS_LINE_HEIGHT: u16 = 1;

/// Height of the key help footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// Marker in front of an expanded section.
pub const OPEN_MARKER: &str = "▾";

/// Marker in front of a collapsed section.
pub const CLOSED_MARKER: &str = "▸";

/// Indent of entry rows under their section.
pub const ENTRY_INDENT: &str = "    ";

/// Symbol drawn in front of the selected row.
pub const SELECTION_SYMBOL: &str = "> ";
