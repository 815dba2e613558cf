//! The materialized section tree.
//!
//! Index documents are TOML or JSON with a top-level `section` array:
//!
//! ```toml
//! [[section]]
//! id = "install"
//! kind = "step"
//! title = "Installation"
//!
//! [[section.entry]]
//! label = "Install Guide"
//! search = "install setup guide"
//! href = "install_guide.html"
//! ```

use super::{Entry, IndexError, Section};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Address of one entry: its section position and its position within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPos {
    /// Index of the containing section.
    pub section: usize,
    /// Index of the entry within that section.
    pub entry: usize,
}

impl EntryPos {
    /// Build a position.
    pub fn new(section: usize, entry: usize) -> Self {
        Self { section, entry }
    }
}

/// Ordered collection of sections with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocIndex {
    #[serde(default, rename = "section")]
    sections: Vec<Section>,
}

impl DocIndex {
    /// Build an index, rejecting duplicate section ids.
    pub fn new(sections: Vec<Section>) -> Result<Self, IndexError> {
        let index = Self { sections };
        index.validate()?;
        Ok(index)
    }

    fn validate(&self) -> Result<(), IndexError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id().as_str()) {
                return Err(IndexError::DuplicateSectionId(section.id().to_string()));
            }
        }
        Ok(())
    }

    /// Parse a TOML index document.
    pub fn from_toml_str(source: &str) -> Result<Self, IndexError> {
        let index: Self = toml::from_str(source).map_err(|e| IndexError::Parse {
            format: "TOML",
            reason: e.to_string(),
        })?;
        index.validate()?;
        Ok(index)
    }

    /// Parse a JSON index document.
    pub fn from_json_str(source: &str) -> Result<Self, IndexError> {
        let index: Self = serde_json::from_str(source).map_err(|e| IndexError::Parse {
            format: "JSON",
            reason: e.to_string(),
        })?;
        index.validate()?;
        Ok(index)
    }

    /// Load an index document, choosing the format by file extension.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, IndexError> = match format.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(IndexError::UnsupportedFormat(path.to_path_buf())),
        };

        let contents = std::fs::read_to_string(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let index = parse(&contents)?;
        tracing::info!(
            path = %path.display(),
            sections = index.section_count(),
            entries = index.entry_count(),
            "Index loaded"
        );
        Ok(index)
    }

    /// Serialize as a TOML index document.
    pub fn to_toml_string(&self) -> Result<String, IndexError> {
        toml::to_string_pretty(self).map_err(|e| IndexError::Serialize(e.to_string()))
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries().len()).sum()
    }

    /// Position of the section with the given id.
    pub fn section_position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id().as_str() == id)
    }

    /// Look up an entry by position.
    pub fn entry(&self, pos: EntryPos) -> Option<&Entry> {
        self.sections
            .get(pos.section)
            .and_then(|s| s.entries().get(pos.entry))
    }

    /// Every entry with its position, in document order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryPos, &Entry)> + '_ {
        self.sections.iter().enumerate().flat_map(|(si, section)| {
            section
                .entries()
                .iter()
                .enumerate()
                .map(move |(ei, entry)| (EntryPos::new(si, ei), entry))
        })
    }
}
