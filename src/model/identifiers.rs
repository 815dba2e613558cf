//! Section identifier newtype with a smart constructor.
//!
//! Section ids are written verbatim into the page-address fragment as a
//! comma-joined list, so the constructor rejects anything that would break
//! that encoding. Raw construction is never exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique identifier of a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionId(String);

impl SectionId {
    /// Smart constructor: validates a non-empty id free of fragment delimiters.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSectionId> {
        let id = raw.into();
        if id.is_empty() {
            return Err(InvalidSectionId::Empty);
        }
        if let Some(ch) = id.chars().find(|c| is_reserved(*c)) {
            return Err(InvalidSectionId::Reserved { id, ch });
        }
        Ok(Self(id))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_reserved(ch: char) -> bool {
    ch == ',' || ch == '#' || ch.is_whitespace()
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionId {
    type Error = InvalidSectionId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

// ===== Error Types =====

/// Rejection reasons for [`SectionId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSectionId {
    /// The id was the empty string.
    #[error("Section ID cannot be empty")]
    Empty,
    /// The id contains a character reserved by the fragment encoding.
    #[error("Section ID {id:?} contains reserved character {ch:?}")]
    Reserved {
        /// The rejected id.
        id: String,
        /// The first offending character.
        ch: char,
    },
}
