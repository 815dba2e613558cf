//! Flattened tree rows and the selection cursor.
//!
//! The tree is drawn as a flat list: one row per visible section, followed
//! by one row per visible entry when that section is open.

use crate::model::{DocIndex, EntryPos};
use crate::surface::MemorySurface;

/// One line of the section tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Section header at this position.
    Section(usize),
    /// Entry at this position.
    Entry(EntryPos),
}

impl Row {
    /// Section the row belongs to.
    pub fn section(self) -> usize {
        match self {
            Self::Section(section) => section,
            Self::Entry(pos) => pos.section,
        }
    }
}

/// Rows currently visible on `surface`, in document order.
pub fn visible_rows(index: &DocIndex, surface: &MemorySurface) -> Vec<Row> {
    let mut rows = Vec::new();
    for (section, content) in index.sections().iter().enumerate() {
        if surface.is_section_hidden(section) {
            continue;
        }
        rows.push(Row::Section(section));
        if !surface.is_section_open(section) {
            continue;
        }
        rows.extend(
            (0..content.entries().len())
                .map(|entry| EntryPos::new(section, entry))
                .filter(|pos| !surface.is_entry_hidden(*pos))
                .map(Row::Entry),
        );
    }
    rows
}

/// Selected row index, kept within the visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    selected: usize,
}

impl Cursor {
    /// Selected row index.
    pub fn selected(self) -> usize {
        self.selected
    }

    /// Move up one row, stopping at the top.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move down one row, stopping at the last of `row_count` rows.
    pub fn move_down(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    /// Pull the cursor back inside `row_count` rows.
    pub fn clamp(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    /// Select the given row index.
    pub fn select(&mut self, row: usize) {
        self.selected = row;
    }
}
