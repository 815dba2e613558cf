//! Open-section fragment codec.
//!
//! The set of manually open sections is kept in the page address as
//! `#id1,id2,...`. Encoding reads only the manual flags, so sections that
//! are merely force-opened by an active search never leak into it.

use crate::model::DocIndex;
use crate::state::ExpansionStore;
use tracing::warn;

/// Separator between ids in the fragment.
pub const SEPARATOR: &str = ",";

/// Fragment for the current manual state; `None` when nothing is open.
pub fn encode(index: &DocIndex, expansion: &ExpansionStore) -> Option<String> {
    let ids = expansion.open_ids(index);
    if ids.is_empty() {
        return None;
    }
    let joined = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    Some(format!("#{joined}"))
}

/// Outcome of restoring a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Number of sections opened.
    pub opened: usize,
    /// Ids that matched no section.
    pub skipped: Vec<String>,
}

/// Open every section listed in `fragment`.
///
/// Additive: sections not listed keep their state. The leading `#` is
/// optional, empty tokens are ignored, and unknown ids are skipped.
pub fn decode_into(fragment: &str, index: &DocIndex, expansion: &mut ExpansionStore) -> RestoreReport {
    let mut report = RestoreReport::default();
    let body = fragment.strip_prefix('#').unwrap_or(fragment);

    for id in body.split(SEPARATOR).map(str::trim).filter(|id| !id.is_empty()) {
        match index.section_position(id) {
            Some(position) => {
                expansion.set_open(position, true);
                report.opened += 1;
            }
            None => {
                warn!(id = %id, "Skipping unknown section id in fragment");
                report.skipped.push(id.to_string());
            }
        }
    }
    report
}
