//! Tests for the visibility cascade.

use super::*;
use crate::model::{Entry, Section, SectionId, SectionKind};

fn section(id: &str, labels: &[&str]) -> Section {
    labels.iter().fold(
        Section::new(SectionId::new(id).expect("valid id"), SectionKind::Other),
        |s, label| s.with_entry(Entry::new(*label)),
    )
}

fn sample_index() -> DocIndex {
    DocIndex::new(vec![
        section("S1", &["Install Guide", "Upgrade Guide"]),
        section("S2", &["Troubleshooting Network"]),
        section("S3", &[]),
    ])
    .expect("valid index")
}

#[test]
fn empty_query_shows_everything_and_counts_zero() {
    let index = sample_index();
    let result = apply(&index, &Query::empty());

    assert_eq!(result.match_count(), 0);
    assert!(!result.forces_open());
    for (pos, _) in index.entries() {
        assert!(result.entry_visible(pos));
    }
    for i in 0..index.section_count() {
        assert!(result.section_visible(i), "section {i} should be visible");
    }
}

#[test]
fn empty_section_is_visible_without_query() {
    let result = apply(&sample_index(), &Query::empty());
    assert!(result.section_visible(2));
}

#[test]
fn query_hides_non_matching_entries_and_empty_sections() {
    let index = sample_index();
    let result = apply(&index, &Query::parse("net"));

    assert_eq!(result.match_count(), 1);
    assert!(result.forces_open());
    assert!(!result.entry_visible(EntryPos::new(0, 0)));
    assert!(!result.entry_visible(EntryPos::new(0, 1)));
    assert!(result.entry_visible(EntryPos::new(1, 0)));
    assert!(!result.section_visible(0));
    assert!(result.section_visible(1));
    assert!(!result.section_visible(2));
    assert_eq!(result.visible_section_count(), 1);
}

#[test]
fn counts_every_matching_entry() {
    let result = apply(&sample_index(), &Query::parse("guide"));
    assert_eq!(result.match_count(), 2);
    assert!(result.section_visible(0));
    assert!(!result.section_visible(1));
}

#[test]
fn no_match_hides_all_sections() {
    let result = apply(&sample_index(), &Query::parse("xyz"));
    assert_eq!(result.match_count(), 0);
    assert_eq!(result.visible_section_count(), 0);
    assert!(result.forces_open());
}

#[test]
fn broader_query_restores_entries_hidden_by_narrower_one() {
    let index = sample_index();
    let narrow = apply(&index, &Query::parse("inst"));
    assert!(!narrow.entry_visible(EntryPos::new(0, 1)));

    let broad = apply(&index, &Query::parse("in"));
    assert!(broad.entry_visible(EntryPos::new(0, 0)));
    assert!(broad.entry_visible(EntryPos::new(1, 0)));
}

#[test]
fn empty_index_is_total() {
    let result = apply(&DocIndex::default(), &Query::parse("anything"));
    assert_eq!(result.match_count(), 0);
    assert!(!result.section_visible(0));
    assert!(!result.entry_visible(EntryPos::new(0, 0)));
}

#[test]
fn section_visibility_follows_entries() {
    let index = sample_index();
    for term in ["", "g", "guide", "net", "xyz", "up"] {
        let result = apply(&index, &Query::parse(term));
        for (si, section) in index.sections().iter().enumerate() {
            let any_entry = (0..section.entries().len())
                .any(|ei| result.entry_visible(EntryPos::new(si, ei)));
            assert_eq!(
                result.section_visible(si),
                term.is_empty() || any_entry,
                "term {term:?} section {si}"
            );
        }
    }
}
