//! Entry matcher.

use super::highlight::contains_folded;
use super::Query;
use crate::model::Entry;

/// Whether `entry` passes the filter.
///
/// The inactive query matches everything. Otherwise the case-folded search
/// key (the label when no key was given) must contain the term, using the
/// same folding the highlighter uses. No word boundaries, no normalization
/// beyond case folding.
pub fn matches(entry: &Entry, query: &Query) -> bool {
    if !query.is_active() {
        return true;
    }
    contains_folded(entry.search_key(), query.as_str())
}
