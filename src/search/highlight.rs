//! Highlight renderer.
//!
//! Splits a label into plain and matched segments for a query term. Matching
//! is case-insensitive; occurrences are found left to right without overlap,
//! each scan resuming at the end of the previous match. Concatenating the
//! segments always reproduces the original text.

use super::query::fold_char;
use std::ops::Range;

// ===== Segment =====

/// One run of rendered label text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any match.
    Plain(String),
    /// Text of one occurrence of the term, in its original casing.
    Matched(String),
}

impl Segment {
    /// The segment text.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Matched(text) => text,
        }
    }

    /// Whether this segment marks a match.
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

// ===== Rendering =====

/// Render `original` as segments marking every occurrence of `term`.
///
/// An empty term, or a term with no occurrence, yields a single plain
/// segment equal to `original`.
pub fn render(original: &str, term: &str) -> Vec<Segment> {
    let spans = highlight_spans(original, term);
    if spans.is_empty() {
        return vec![Segment::Plain(original.to_string())];
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            segments.push(Segment::Plain(original[cursor..span.start].to_string()));
        }
        segments.push(Segment::Matched(original[span.clone()].to_string()));
        cursor = span.end;
    }
    if cursor < original.len() {
        segments.push(Segment::Plain(original[cursor..].to_string()));
    }
    segments
}

/// Byte ranges of every non-overlapping occurrence of `term` in `original`.
///
/// Ranges are ascending, non-overlapping and always fall on char
/// boundaries of `original`.
pub fn highlight_spans(original: &str, term: &str) -> Vec<Range<usize>> {
    let needle = fold_chars(term);
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack = FoldedText::new(original);
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(start) = haystack.find(&needle, cursor) {
        let end = start + needle.len();
        spans.push(haystack.byte_range(start, end));
        cursor = end;
    }
    spans
}

/// Whether `term` occurs in `original` under the same folding and
/// boundary rules [`highlight_spans`] uses. An empty term always occurs.
pub fn contains_folded(original: &str, term: &str) -> bool {
    let needle = fold_chars(term);
    needle.is_empty() || FoldedText::new(original).find(&needle, 0).is_some()
}

fn fold_chars(text: &str) -> Vec<char> {
    text.chars().flat_map(fold_char).collect()
}

/// Case-folded view of a string that remembers which original char each
/// folded char came from, so matches map back to exact original slices even
/// when folding changes the length of a char.
struct FoldedText {
    chars: Vec<char>,
    owner: Vec<usize>,
    bounds: Vec<Range<usize>>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut owner = Vec::with_capacity(text.len());
        let mut bounds = Vec::new();

        for (i, (offset, ch)) in text.char_indices().enumerate() {
            bounds.push(offset..offset + ch.len_utf8());
            for folded in fold_char(ch) {
                chars.push(folded);
                owner.push(i);
            }
        }

        Self {
            chars,
            owner,
            bounds,
        }
    }

    /// True if folded position `pos` starts an original char (or is the end).
    fn is_boundary(&self, pos: usize) -> bool {
        pos == 0 || pos >= self.chars.len() || self.owner[pos] != self.owner[pos - 1]
    }

    fn find(&self, needle: &[char], from: usize) -> Option<usize> {
        let len = needle.len();
        if len > self.chars.len() {
            return None;
        }
        (from..=self.chars.len() - len).find(|&pos| {
            self.chars[pos..pos + len] == *needle
                && self.is_boundary(pos)
                && self.is_boundary(pos + len)
        })
    }

    fn byte_range(&self, start: usize, end: usize) -> Range<usize> {
        self.bounds[self.owner[start]].start..self.bounds[self.owner[end - 1]].end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Segment {
        Segment::Plain(s.to_string())
    }

    fn matched(s: &str) -> Segment {
        Segment::Matched(s.to_string())
    }

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn empty_term_returns_original_unchanged() {
        assert_eq!(render("Install Guide", ""), vec![plain("Install Guide")]);
        assert!(highlight_spans("Install Guide", "").is_empty());
    }

    #[test]
    fn no_occurrence_returns_original_unchanged() {
        assert_eq!(render("Install Guide", "xyz"), vec![plain("Install Guide")]);
    }

    #[test]
    fn empty_original_never_renders_empty_list() {
        assert_eq!(render("", "a"), vec![plain("")]);
    }

    #[test]
    fn marks_match_in_original_casing() {
        assert_eq!(
            render("Troubleshooting Network", "net"),
            vec![plain("Troubleshooting "), matched("Net"), plain("work")]
        );
    }

    #[test]
    fn marks_every_occurrence() {
        assert_eq!(
            render("Net and net", "NET"),
            vec![matched("Net"), plain(" and "), matched("net")]
        );
    }

    #[test]
    fn occurrences_do_not_overlap() {
        // "aaaa" contains "aa" three times overlapping, twice non-overlapping.
        assert_eq!(render("aaaa", "aa"), vec![matched("aa"), matched("aa")]);
        assert_eq!(highlight_spans("aaa", "aa"), vec![0..2]);
    }

    #[test]
    fn whole_string_match() {
        assert_eq!(render("dns", "DNS"), vec![matched("dns")]);
    }

    #[test]
    fn final_sigma_is_highlighted_for_either_case() {
        assert_eq!(render("ΟΔΟΣ", "ΟΣ"), vec![plain("ΟΔ"), matched("ΟΣ")]);
        assert_eq!(render("οδος", "ΟΣ"), vec![plain("οδ"), matched("ος")]);
        assert!(contains_folded("ΟΔΟΣ", "οσ"));
    }

    #[test]
    fn contains_agrees_with_spans() {
        for (text, term) in [("Straße", "SS"), ("İstanbul", "i"), ("Network", "NET"), ("", "a")] {
            assert_eq!(contains_folded(text, term), !highlight_spans(text, term).is_empty());
        }
        assert!(contains_folded("anything", ""));
    }

    #[test]
    fn multibyte_text_slices_on_char_boundaries() {
        let original = "資料一覧 Network 資料";
        let segments = render(original, "資料");
        assert_eq!(
            segments,
            vec![matched("資料"), plain("一覧 Network "), matched("資料")]
        );
        assert_eq!(concat(&segments), original);
    }

    #[test]
    fn length_changing_fold_maps_back_to_original() {
        // 'İ' lowercases to two chars; the matched slice must still be the original char.
        let original = "xİy";
        let term: String = 'İ'.to_lowercase().collect();
        let segments = render(original, &term);
        assert_eq!(segments, vec![plain("x"), matched("İ"), plain("y")]);
    }

    #[test]
    fn partial_fold_of_a_char_is_not_a_match() {
        // "i" is only a prefix of the folding of 'İ', so it must not split the char.
        assert_eq!(render("İ", "i"), vec![plain("İ")]);
    }

    #[test]
    fn render_is_lossless() {
        for (original, term) in [
            ("Install Guide", "in"),
            ("", ""),
            ("abcabc", "bc"),
            ("ÄÖÜ äöü", "ö"),
        ] {
            assert_eq!(concat(&render(original, term)), original);
        }
    }
}
