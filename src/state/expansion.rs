//! Section expansion store.
//!
//! Holds only the manual open/closed flag of each section: what the reader
//! or a bulk action chose. An active query does not write here; it is folded
//! in at read time by [`ExpansionStore::effective_open`], so clearing the
//! query restores the manual layout exactly.

use crate::model::{DocIndex, SectionId, SectionKind};

/// Bulk expand/collapse actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    /// Open every section.
    OpenAll,
    /// Close every section.
    CloseAll,
    /// Close every section, then open step and info sections.
    OpenSteps,
    /// Close every section, then open troubleshooting sections.
    OpenTroubles,
}

/// Manual open state per section, aligned with `DocIndex::sections()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStore {
    manual_open: Vec<bool>,
}

impl ExpansionStore {
    /// All sections of `index` closed.
    pub fn for_index(index: &DocIndex) -> Self {
        Self {
            manual_open: vec![false; index.section_count()],
        }
    }

    /// Manual flag of a section. Unknown positions read as closed.
    pub fn is_manually_open(&self, section: usize) -> bool {
        self.manual_open.get(section).copied().unwrap_or(false)
    }

    /// Open state to display: forced open while a query is active.
    pub fn effective_open(&self, section: usize, query_active: bool) -> bool {
        query_active || self.is_manually_open(section)
    }

    /// Set the manual flag. Unknown positions are ignored.
    pub fn set_open(&mut self, section: usize, open: bool) {
        if let Some(flag) = self.manual_open.get_mut(section) {
            *flag = open;
        }
    }

    /// Flip the manual flag; returns the new value.
    pub fn toggle(&mut self, section: usize) -> bool {
        let open = !self.is_manually_open(section);
        self.set_open(section, open);
        self.is_manually_open(section)
    }

    /// Apply a bulk action.
    pub fn apply_bulk(&mut self, index: &DocIndex, action: BulkAction) {
        match action {
            BulkAction::OpenAll => self.set_all(true),
            BulkAction::CloseAll => self.set_all(false),
            BulkAction::OpenSteps => self.open_only(index, &[SectionKind::Step, SectionKind::Info]),
            BulkAction::OpenTroubles => self.open_only(index, &[SectionKind::Trouble]),
        }
    }

    fn set_all(&mut self, open: bool) {
        self.manual_open.iter_mut().for_each(|flag| *flag = open);
    }

    fn open_only(&mut self, index: &DocIndex, kinds: &[SectionKind]) {
        self.set_all(false);
        for (i, section) in index.sections().iter().enumerate() {
            if kinds.contains(&section.kind()) {
                self.set_open(i, true);
            }
        }
    }

    /// Ids of manually open sections, in document order.
    pub fn open_ids<'a>(&self, index: &'a DocIndex) -> Vec<&'a SectionId> {
        index
            .sections()
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_manually_open(*i))
            .map(|(_, section)| section.id())
            .collect()
    }
}
