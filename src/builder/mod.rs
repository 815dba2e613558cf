//! Index generation from a directory of HTML pages.
//!
//! `index_from_dir` turns a page directory into a one-section [`DocIndex`]
//! whose entries link to the pages. `heading_rows` lists the first `<h1>`
//! of each page for auditing anchors.

use crate::model::{DocIndex, Entry, IndexError, InvalidSectionId, Section, SectionId, SectionKind};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

/// Id of the single section produced by [`index_from_dir`].
pub const PAGES_SECTION_ID: &str = "pages";

/// Title of that section.
pub const PAGES_SECTION_TITLE: &str = "Documents";

/// Page excluded from the listing (the generated landing page itself).
pub const LANDING_PAGE: &str = "index.html";

/// Header row of the heading listing.
pub const HEADINGS_HEADER: &str = "filename\th1_id\th1_text";

static PLAIN_PAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+\.html$").expect("static pattern"));

static FIRST_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b([^>]*)>(.*?)</h1\s*>").expect("static pattern"));

static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("static pattern")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Errors from scanning a page directory.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Directory listing or page read failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The generated index failed validation.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The section id constant was rejected.
    #[error(transparent)]
    InvalidSectionId(#[from] InvalidSectionId),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BuildError + '_ {
    move |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// File names of `*.html` pages in `dir`, unsorted.
fn html_file_names(dir: &Path) -> Result<Vec<String>, BuildError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        if !entry.file_type().map_err(io_error(dir))?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(path = ?entry.path(), "Skipping non UTF-8 file name");
            continue;
        };
        if Path::new(&name).extension().is_some_and(|ext| ext == "html") {
            names.push(name);
        }
    }
    Ok(names)
}

/// Display title of a page file: stem with underscores as spaces.
pub fn page_title(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    stem.replace('_', " ")
}

/// Build the index of every page in `dir` except the landing page.
///
/// Pages are listed by file name, descending, so date-prefixed names
/// show newest first.
pub fn index_from_dir(dir: &Path) -> Result<DocIndex, BuildError> {
    let mut names: Vec<String> = html_file_names(dir)?
        .into_iter()
        .filter(|name| name != LANDING_PAGE)
        .collect();
    names.sort_unstable_by(|a, b| b.cmp(a));

    let section = names.iter().fold(
        Section::new(SectionId::new(PAGES_SECTION_ID)?, SectionKind::Info)
            .with_title(PAGES_SECTION_TITLE),
        |section, name| section.with_entry(Entry::new(page_title(name)).with_href(name.as_str())),
    );

    info!(dir = %dir.display(), pages = names.len(), "Built index from page directory");
    Ok(DocIndex::new(vec![section])?)
}

/// First `<h1>` of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heading {
    /// Its `id` attribute, empty when absent.
    pub id: String,
    /// Its text with tags removed and whitespace collapsed.
    pub text: String,
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Extract the first `<h1>` of `html`; empty fields when there is none.
pub fn extract_h1(html: &str) -> Heading {
    let Some(caps) = FIRST_H1.captures(html) else {
        return Heading::default();
    };

    let attrs = caps.get(1).map_or("", |m| m.as_str());
    let id = ID_ATTR
        .captures(attrs)
        .and_then(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| unescape_entities(m.as_str()))
        .unwrap_or_default();

    let inner = caps.get(2).map_or("", |m| m.as_str());
    let stripped = unescape_entities(&TAG.replace_all(inner, ""));
    let text = WHITESPACE.replace_all(stripped.trim(), " ").into_owned();

    Heading { id, text }
}

/// One row of the heading listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRow {
    /// Page file name.
    pub file_name: String,
    /// Its first heading.
    pub heading: Heading,
}

/// Headings of every plainly named page (`[A-Za-z0-9_]+.html`) in `dir`,
/// sorted by file name.
pub fn heading_rows(dir: &Path) -> Result<Vec<HeadingRow>, BuildError> {
    let mut names: Vec<String> = html_file_names(dir)?
        .into_iter()
        .filter(|name| PLAIN_PAGE_NAME.is_match(name))
        .collect();
    names.sort_unstable();

    names
        .into_iter()
        .map(|file_name| {
            let path = dir.join(&file_name);
            let html = std::fs::read_to_string(&path).map_err(io_error(&path))?;
            Ok(HeadingRow {
                heading: extract_h1(&html),
                file_name,
            })
        })
        .collect()
}

/// Render rows as TSV with [`HEADINGS_HEADER`] first.
pub fn headings_tsv(rows: &[HeadingRow]) -> String {
    std::iter::once(HEADINGS_HEADER.to_string())
        .chain(rows.iter().map(|row| {
            format!(
                "{}\t{}\t{}",
                row.file_name, row.heading.id, row.heading.text
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}
