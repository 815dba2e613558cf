//! Plain-text rendering of a surface, for one-shot output.

use super::constants::{CLOSED_MARKER, ENTRY_INDENT, OPEN_MARKER};
use crate::model::{DocIndex, EntryPos};
use crate::search::Segment;
use crate::surface::MemorySurface;

/// Visible sections, entries of open sections and the status text.
///
/// Matched label segments are wrapped in `[` `]`.
pub fn format_plain(index: &DocIndex, surface: &MemorySurface) -> String {
    let mut lines = Vec::new();

    for (section, content) in index.sections().iter().enumerate() {
        if surface.is_section_hidden(section) {
            continue;
        }
        let open = surface.is_section_open(section);
        let marker = if open { OPEN_MARKER } else { CLOSED_MARKER };
        lines.push(format!("{marker} {} ({})", content.title(), content.id()));
        if !open {
            continue;
        }

        for entry in 0..content.entries().len() {
            let pos = EntryPos::new(section, entry);
            if surface.is_entry_hidden(pos) {
                continue;
            }
            let mut line = format!("{ENTRY_INDENT}{}", bracket_matches(surface.entry_label(pos)));
            if let Some(href) = index.entry(pos).and_then(|e| e.href()) {
                line.push_str(&format!("  <{href}>"));
            }
            lines.push(line);
        }
    }

    if let Some(text) = surface.status().map(|s| s.text()).filter(|t| !t.is_empty()) {
        lines.push(text.to_string());
    }

    lines.join("\n")
}

fn bracket_matches(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Matched(text) => format!("[{text}]"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, Section, SectionId, SectionKind};
    use crate::state::{PageOptions, PageState};

    fn page() -> PageState {
        let index = DocIndex::new(vec![
            Section::new(SectionId::new("S1").expect("valid"), SectionKind::Step)
                .with_title("Setup")
                .with_entry(Entry::new("Install Guide").with_href("install.html")),
            Section::new(SectionId::new("S2").expect("valid"), SectionKind::Trouble)
                .with_entry(Entry::new("Troubleshooting Network")),
        ])
        .expect("valid index");
        PageState::new(index, PageOptions::default())
    }

    #[test]
    fn active_query_lists_matches_with_brackets_and_status() {
        let mut page = page();
        let mut surface = MemorySurface::for_index(page.index());
        page.query_changed(&mut surface, "net");

        assert_eq!(
            format_plain(page.index(), &surface),
            "▾ S2 (S2)\n    Troubleshooting [Net]work\n1 found"
        );
    }

    #[test]
    fn no_query_lists_closed_sections_only() {
        let page = page();
        let mut surface = MemorySurface::for_index(page.index());
        page.mount(&mut surface);

        assert_eq!(
            format_plain(page.index(), &surface),
            "▸ Setup (S1)\n▸ S2 (S2)"
        );
    }

    #[test]
    fn href_is_shown_after_label() {
        let mut page = page();
        let mut surface = MemorySurface::for_index(page.index());
        page.query_changed(&mut surface, "guide");

        assert_eq!(
            format_plain(page.index(), &surface),
            "▾ Setup (S1)\n    Install [Guide]  <install.html>\n1 found"
        );
    }

    #[test]
    fn nothing_found_prints_status_only() {
        let mut page = page();
        let mut surface = MemorySurface::for_index(page.index());
        page.query_changed(&mut surface, "xyz");

        assert_eq!(format_plain(page.index(), &surface), "not found");
    }
}
