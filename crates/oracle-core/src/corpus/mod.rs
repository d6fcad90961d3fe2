//! Quotation corpus and image catalog.
//!
//! Both are plain ordered lists of strings read from line-oriented text
//! files. They are built once by the [`loader`] and shared read-only through
//! the [`cache`].

pub mod cache;
pub mod loader;

use std::path::PathBuf;

/// Image shown when no image file is available or it lists no URLs.
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1518098268026-4e140130aa11?w=800";

/// Ordered quotation lines from all corpus files.
///
/// Lines are trimmed and never empty. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every non-blank line of `text`, trimmed, and return how many
    /// lines were added.
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let before = self.lines.len();
        self.lines.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
        self.lines.len() - before
    }

    /// Parse a single text into a corpus.
    pub fn parse(text: &str) -> Self {
        let mut corpus = Self::new();
        corpus.extend_from_text(text);
        corpus
    }

    /// All lines in load order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines were loaded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether `line` is a member of the corpus.
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl<S: Into<String>> FromIterator<S> for Corpus {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for line in iter {
            corpus.extend_from_text(&line.into());
        }
        corpus
    }
}

/// Ordered candidate image URLs. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCatalog {
    urls: Vec<String>,
    fallback: bool,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self {
            urls: vec![DEFAULT_IMAGE_URL.to_string()],
            fallback: true,
        }
    }
}

impl ImageCatalog {
    /// Build a catalog from URLs, falling back to [`DEFAULT_IMAGE_URL`] when
    /// the list is empty.
    pub fn from_urls(urls: Vec<String>) -> Self {
        if urls.is_empty() {
            Self::default()
        } else {
            Self {
                urls,
                fallback: false,
            }
        }
    }

    /// Parse an image file: the first whitespace-delimited token of each
    /// non-blank line is a URL.
    pub fn parse(text: &str) -> Self {
        Self::from_urls(parse_urls(text))
    }

    /// All URLs in load order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// URL at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Number of URLs. Always at least one.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Always `false`; present for API symmetry with [`Corpus`].
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Whether the built-in default image is in use.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Whether `url` is a member of the catalog.
    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }
}

/// First token of each non-blank line.
pub(crate) fn parse_urls(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// What a single data file contributed to a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Full path that was looked up.
    pub path: PathBuf,
    /// Whether the file existed.
    pub present: bool,
    /// Lines (or URLs) taken from the file.
    pub entries: usize,
}

/// A loaded corpus and catalog, with a report of where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleData {
    /// Combined quotation lines.
    pub corpus: Corpus,
    /// Image URLs.
    pub catalog: ImageCatalog,
    /// One entry per corpus file, in load order.
    pub corpus_report: Vec<FileReport>,
    /// The image file lookup.
    pub image_report: FileReport,
}
