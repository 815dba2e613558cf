//! Sections and the entries they group.

use super::SectionId;
use serde::{Deserialize, Serialize};

// ===== SectionKind =====

/// Classification tag of a section, consumed by the bulk-open actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// A procedure step group.
    Step,
    /// A reference / background group.
    Info,
    /// A troubleshooting group.
    Trouble,
    /// Any other tag.
    #[default]
    #[serde(other)]
    Other,
}

impl SectionKind {
    /// Tag name as written in index documents.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Info => "info",
            Self::Trouble => "trouble",
            Self::Other => "other",
        }
    }
}

// ===== Entry =====

/// One indexed, displayable item (typically a link to a document).
///
/// Content is immutable for the lifetime of the page; search only changes
/// how the label is rendered and whether the entry is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl Entry {
    /// Create an entry with only a display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            search: None,
            href: None,
        }
    }

    /// Attach a dedicated search key, matched instead of the label.
    pub fn with_search_key(mut self, key: impl Into<String>) -> Self {
        self.search = Some(key.into());
        self
    }

    /// Attach a link target.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Text shown to the reader.
    pub fn display_label(&self) -> &str {
        &self.label
    }

    /// Text matched against queries: the search key, or the label when absent.
    pub fn search_key(&self) -> &str {
        self.search.as_deref().unwrap_or(&self.label)
    }

    /// Whether a dedicated search key was supplied.
    pub fn has_search_key(&self) -> bool {
        self.search.is_some()
    }

    /// Link target, if any.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

// ===== Section =====

/// A named, collapsible group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    id: SectionId,
    #[serde(default)]
    kind: SectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, rename = "entry", skip_serializing_if = "Vec::is_empty")]
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section.
    pub fn new(id: SectionId, kind: SectionKind) -> Self {
        Self {
            id,
            kind,
            title: None,
            entries: Vec::new(),
        }
    }

    /// Set the heading shown for this section.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append an entry.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Section id.
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// Section kind tag.
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Heading text; falls back to the id.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_key_falls_back_to_label() {
        let entry = Entry::new("Install Guide");
        assert_eq!(entry.search_key(), "Install Guide");
        assert!(!entry.has_search_key());
    }

    #[test]
    fn search_key_overrides_label() {
        let entry = Entry::new("Install Guide").with_search_key("setup onboarding");
        assert_eq!(entry.search_key(), "setup onboarding");
        assert_eq!(entry.display_label(), "Install Guide");
    }

    #[test]
    fn unknown_kind_deserializes_as_other() {
        let kind: SectionKind = serde_json::from_str("\"appendix\"").expect("parses");
        assert_eq!(kind, SectionKind::Other);
    }

    #[test]
    fn title_defaults_to_id() {
        let section = Section::new(SectionId::new("faq").expect("valid"), SectionKind::Info);
        assert_eq!(section.title(), "faq");
    }
}
