//! Retained in-memory surface.
//!
//! Mirrors the index shape and records every write. The terminal viewer
//! draws from it, the one-shot search command prints from it, and tests
//! assert against it.

use super::{ClearControl, RenderSurface, SearchInput, StatusLine};
use crate::model::{DocIndex, EntryPos};
use crate::search::Segment;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SectionSlot {
    hidden: bool,
    open: bool,
    entries: Vec<EntrySlot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EntrySlot {
    hidden: bool,
    label: Vec<Segment>,
}

/// In-memory rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    sections: Vec<SectionSlot>,
    status: Option<StatusLine>,
    clear: Option<ClearControl>,
    input: Option<SearchInput>,
}

impl MemorySurface {
    /// Surface for `index` with every optional widget present.
    ///
    /// Sections start closed and visible; labels start as the plain display label.
    pub fn for_index(index: &DocIndex) -> Self {
        let sections = index
            .sections()
            .iter()
            .map(|section| SectionSlot {
                hidden: false,
                open: false,
                entries: section
                    .entries()
                    .iter()
                    .map(|entry| EntrySlot {
                        hidden: false,
                        label: vec![Segment::Plain(entry.display_label().to_string())],
                    })
                    .collect(),
            })
            .collect();

        Self {
            sections,
            status: Some(StatusLine::default()),
            clear: Some(ClearControl::default()),
            input: Some(SearchInput::default()),
        }
    }

    /// Drop the status line widget.
    pub fn without_status(mut self) -> Self {
        self.status = None;
        self
    }

    /// Drop the clear control widget.
    pub fn without_clear_control(mut self) -> Self {
        self.clear = None;
        self
    }

    /// Drop the search input widget.
    pub fn without_search_input(mut self) -> Self {
        self.input = None;
        self
    }

    /// Whether the section is hidden. Unknown positions read as hidden.
    pub fn is_section_hidden(&self, section: usize) -> bool {
        self.sections.get(section).map_or(true, |s| s.hidden)
    }

    /// Whether the section is expanded.
    pub fn is_section_open(&self, section: usize) -> bool {
        self.sections.get(section).is_some_and(|s| s.open)
    }

    /// Whether the entry is hidden. Unknown positions read as hidden.
    pub fn is_entry_hidden(&self, pos: EntryPos) -> bool {
        self.entry_slot(pos).map_or(true, |e| e.hidden)
    }

    /// Rendered label segments of an entry.
    pub fn entry_label(&self, pos: EntryPos) -> &[Segment] {
        self.entry_slot(pos)
            .map(|e| e.label.as_slice())
            .unwrap_or(&[])
    }

    /// Rendered label as plain text.
    pub fn entry_text(&self, pos: EntryPos) -> String {
        self.entry_label(pos).iter().map(Segment::text).collect()
    }

    /// Status widget, if present.
    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    /// Clear control widget, if present.
    pub fn clear(&self) -> Option<&ClearControl> {
        self.clear.as_ref()
    }

    /// Search input widget, if present.
    pub fn input(&self) -> Option<&SearchInput> {
        self.input.as_ref()
    }

    /// Whether keyboard focus is inside the search input.
    pub fn search_focused(&self) -> bool {
        self.input.as_ref().is_some_and(SearchInput::is_focused)
    }

    fn entry_slot(&self, pos: EntryPos) -> Option<&EntrySlot> {
        self.sections
            .get(pos.section)
            .and_then(|s| s.entries.get(pos.entry))
    }

    fn entry_slot_mut(&mut self, pos: EntryPos) -> Option<&mut EntrySlot> {
        self.sections
            .get_mut(pos.section)
            .and_then(|s| s.entries.get_mut(pos.entry))
    }
}

impl RenderSurface for MemorySurface {
    fn set_section_hidden(&mut self, section: usize, hidden: bool) {
        if let Some(slot) = self.sections.get_mut(section) {
            slot.hidden = hidden;
        }
    }

    fn set_section_open(&mut self, section: usize, open: bool) {
        if let Some(slot) = self.sections.get_mut(section) {
            slot.open = open;
        }
    }

    fn set_entry_hidden(&mut self, pos: EntryPos, hidden: bool) {
        if let Some(slot) = self.entry_slot_mut(pos) {
            slot.hidden = hidden;
        }
    }

    fn set_entry_label(&mut self, pos: EntryPos, segments: &[Segment]) {
        if let Some(slot) = self.entry_slot_mut(pos) {
            slot.label = segments.to_vec();
        }
    }

    fn status_line(&mut self) -> Option<&mut StatusLine> {
        self.status.as_mut()
    }

    fn clear_control(&mut self) -> Option<&mut ClearControl> {
        self.clear.as_mut()
    }

    fn search_input(&mut self) -> Option<&mut SearchInput> {
        self.input.as_mut()
    }
}
