//! Normalized search query.

use std::fmt;

/// Case-fold one char: uppercase it, then lowercase the result.
///
/// Folding per char ignores context, so a word-final `Σ` and `ς` both fold
/// to `σ`, and `ß` folds like `SS`. A string and its uppercase form always
/// fold to the same text.
pub fn fold_char(ch: char) -> impl Iterator<Item = char> {
    ch.to_uppercase().flat_map(char::to_lowercase)
}

/// Case-fold `text` with [`fold_char`].
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// The current search term: trimmed and case-folded.
///
/// The empty query is the distinct "no filter" state; a whitespace-only
/// input normalizes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw input into a query.
    pub fn parse(raw: &str) -> Self {
        Self(fold_case(raw.trim()))
    }

    /// The "no filter" query.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The folded term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the query filters entries.
    pub fn is_active(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_folds() {
        assert_eq!(Query::parse("  NetWork ").as_str(), "network");
    }

    #[test]
    fn final_sigma_folds_like_any_sigma() {
        assert_eq!(Query::parse("ΟΣ").as_str(), "οσ");
        assert_eq!(Query::parse("ος"), Query::parse("ΟΣ"));
    }

    #[test]
    fn sharp_s_folds_like_its_uppercase() {
        assert_eq!(Query::parse("Straße"), Query::parse("STRASSE"));
    }

    #[test]
    fn whitespace_only_is_inactive() {
        assert!(!Query::parse(" \t\n").is_active());
        assert_eq!(Query::parse("   "), Query::empty());
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(Query::parse(" install  guide ").as_str(), "install  guide");
    }
}
