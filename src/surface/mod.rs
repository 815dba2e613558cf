//! Rendering-surface contract.
//!
//! The search controller never draws anything itself. It writes hidden/open
//! flags and label segments through [`RenderSurface`], and updates the
//! optional widgets when the surface has them. A surface without a status
//! line, clear control or search input returns `None` and the controller
//! skips that step.

mod memory;
mod widgets;

pub use memory::MemorySurface;
pub use widgets::{ClearControl, SearchInput, StatusLine};

use crate::model::EntryPos;
use crate::search::Segment;

/// A materialized section tree the controller can mutate.
///
/// Sections and entries are addressed by position in the `DocIndex` the
/// surface was built from.
pub trait RenderSurface {
    /// Show or hide a whole section (header included).
    fn set_section_hidden(&mut self, section: usize, hidden: bool);

    /// Expand or collapse a section.
    fn set_section_open(&mut self, section: usize, open: bool);

    /// Show or hide one entry.
    fn set_entry_hidden(&mut self, pos: EntryPos, hidden: bool);

    /// Replace the rendered label content of one entry.
    fn set_entry_label(&mut self, pos: EntryPos, segments: &[Segment]);

    /// The status text region, if present.
    fn status_line(&mut self) -> Option<&mut StatusLine> {
        None
    }

    /// The clear-query affordance, if present.
    fn clear_control(&mut self) -> Option<&mut ClearControl> {
        None
    }

    /// The query input, if present.
    fn search_input(&mut self) -> Option<&mut SearchInput> {
        None
    }
}
