//! Reading corpus and image files from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Corpus, FileReport, ImageCatalog, OracleData, parse_urls};
use crate::error::{OracleError, OracleResult};

/// Corpus files read by default, in load order.
pub const DEFAULT_CORPUS_FILES: &[&str] = &[
    "bible.txt",
    "sutra.txt",
    "literature.txt",
    "talmud.txt",
    "lyrics.txt",
    "poetry.txt",
];

/// Image URL file read by default.
pub const DEFAULT_IMAGE_FILE: &str = "images.txt";

/// The set of files a load reads. Two equal sources always load equal data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorpusSources {
    dir: PathBuf,
    corpus_files: Vec<String>,
    image_file: String,
}

impl Default for CorpusSources {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl CorpusSources {
    /// Sources with explicit file names relative to `dir`.
    pub fn new(dir: impl Into<PathBuf>, corpus_files: Vec<String>, image_file: String) -> Self {
        Self {
            dir: dir.into(),
            corpus_files,
            image_file,
        }
    }

    /// The default file names inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(
            dir,
            DEFAULT_CORPUS_FILES.iter().map(|s| (*s).to_string()).collect(),
            DEFAULT_IMAGE_FILE.to_string(),
        )
    }

    /// Base directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Corpus file names in load order.
    pub fn corpus_files(&self) -> &[String] {
        &self.corpus_files
    }

    /// Image file name.
    pub fn image_file(&self) -> &str {
        &self.image_file
    }

    fn corpus_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.corpus_files.iter().map(|name| self.dir.join(name))
    }

    fn image_path(&self) -> PathBuf {
        self.dir.join(&self.image_file)
    }
}

/// Read a file, treating "not found" as absent.
fn read_optional(path: &Path) -> OracleResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "data file not found, skipping");
            Ok(None)
        }
        Err(source) => Err(OracleError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the corpus and image catalog named by `sources`.
///
/// Missing files contribute nothing. A missing or empty image file yields the
/// default image. Files that exist but cannot be read are errors.
pub fn load(sources: &CorpusSources) -> OracleResult<OracleData> {
    let mut corpus = Corpus::new();
    let mut corpus_report = Vec::with_capacity(sources.corpus_files.len());

    for path in sources.corpus_paths() {
        let (present, entries) = match read_optional(&path)? {
            Some(text) => (true, corpus.extend_from_text(&text)),
            None => (false, 0),
        };
        corpus_report.push(FileReport {
            path,
            present,
            entries,
        });
    }

    let image_path = sources.image_path();
    let (catalog, image_report) = match read_optional(&image_path)? {
        Some(text) => {
            let urls = parse_urls(&text);
            let entries = urls.len();
            (
                ImageCatalog::from_urls(urls),
                FileReport {
                    path: image_path,
                    present: true,
                    entries,
                },
            )
        }
        None => (
            ImageCatalog::default(),
            FileReport {
                path: image_path,
                present: false,
                entries: 0,
            },
        ),
    };

    info!(
        dir = %sources.dir.display(),
        quotations = corpus.len(),
        images = catalog.len(),
        default_image = catalog.is_fallback(),
        "loaded oracle data"
    );

    Ok(OracleData {
        corpus,
        catalog,
        corpus_report,
        image_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DEFAULT_IMAGE_URL;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn concatenates_files_in_list_order() {
        let dir = TempDir::new().unwrap();
        // Written out of order on purpose; load order comes from the list.
        write(&dir, "poetry.txt", "poem one\n");
        write(&dir, "bible.txt", "verse one\n\n  verse two  \n");
        write(&dir, "talmud.txt", "saying\n");

        let data = load(&CorpusSources::in_dir(dir.path())).unwrap();
        assert_eq!(
            data.corpus.lines(),
            ["verse one", "verse two", "saying", "poem one"]
        );
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "lyrics.txt", "a lyric\n");

        let data = load(&CorpusSources::in_dir(dir.path())).unwrap();
        assert_eq!(data.corpus.len(), 1);
        let present: Vec<bool> = data.corpus_report.iter().map(|r| r.present).collect();
        assert_eq!(present, [false, false, false, false, true, false]);
        assert_eq!(data.corpus_report[4].entries, 1);
    }

    #[test]
    fn all_missing_gives_empty_corpus_and_default_image() {
        let dir = TempDir::new().unwrap();
        let data = load(&CorpusSources::in_dir(dir.path())).unwrap();
        assert!(data.corpus.is_empty());
        assert_eq!(data.catalog.urls(), [DEFAULT_IMAGE_URL]);
        assert!(!data.image_report.present);
    }

    #[test]
    fn image_file_first_token_per_line() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "images.txt",
            "https://img.example/a.jpg dawn over water\n\nhttps://img.example/b.jpg\n",
        );
        let data = load(&CorpusSources::in_dir(dir.path())).unwrap();
        assert_eq!(
            data.catalog.urls(),
            ["https://img.example/a.jpg", "https://img.example/b.jpg"]
        );
        assert_eq!(data.image_report.entries, 2);
    }

    #[test]
    fn blank_image_file_falls_back() {
        let dir = TempDir::new().unwrap();
        write(&dir, "images.txt", "\n   \n");
        let data = load(&CorpusSources::in_dir(dir.path())).unwrap();
        assert!(data.catalog.is_fallback());
        assert!(data.image_report.present);
        assert_eq!(data.image_report.entries, 0);
    }

    #[test]
    fn custom_file_names() {
        let dir = TempDir::new().unwrap();
        write(&dir, "mine.txt", "only line\n");
        write(&dir, "pics.txt", "https://img.example/x.png\n");
        let sources =
            CorpusSources::new(dir.path(), vec!["mine.txt".into()], "pics.txt".into());
        let data = load(&sources).unwrap();
        assert_eq!(data.corpus.lines(), ["only line"]);
        assert_eq!(data.catalog.urls(), ["https://img.example/x.png"]);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected cannot be read as text.
        fs::create_dir(dir.path().join("bible.txt")).unwrap();
        let err = load(&CorpusSources::in_dir(dir.path())).unwrap_err();
        assert!(matches!(err, OracleError::Read { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sutra.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let err = load(&CorpusSources::in_dir(dir.path())).unwrap_err();
        assert!(err.to_string().contains("sutra.txt"));
    }
}
