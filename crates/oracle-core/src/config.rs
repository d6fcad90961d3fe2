//! Configuration for an oracle instance.

use std::path::PathBuf;
use std::time::Duration;

use crate::corpus::loader::{CorpusSources, DEFAULT_CORPUS_FILES, DEFAULT_IMAGE_FILE};

/// Default cosmetic pause before a result is shown.
pub const DEFAULT_PAUSE_MS: u64 = 1200;

/// Configuration for an oracle front-end.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// Directory the data files are read from.
    pub data_dir: PathBuf,
    /// Corpus file names, in load order.
    pub corpus_files: Vec<String>,
    /// Image URL file name.
    pub image_file: String,
    /// Pause before revealing a result. Zero disables it.
    pub pause: Duration,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            corpus_files: DEFAULT_CORPUS_FILES.iter().map(|s| (*s).to_string()).collect(),
            image_file: DEFAULT_IMAGE_FILE.to_string(),
            pause: Duration::from_millis(DEFAULT_PAUSE_MS),
        }
    }
}

impl OracleConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Replace the corpus file list.
    pub fn with_corpus_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.corpus_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the image URL file name.
    pub fn with_image_file(mut self, name: impl Into<String>) -> Self {
        self.image_file = name.into();
        self
    }

    /// Set the reveal pause in milliseconds.
    pub fn with_pause_ms(mut self, ms: u64) -> Self {
        self.pause = Duration::from_millis(ms);
        self
    }

    /// The file set this configuration loads, used as the cache key.
    pub fn sources(&self) -> CorpusSources {
        CorpusSources::new(
            self.data_dir.clone(),
            self.corpus_files.clone(),
            self.image_file.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = OracleConfig::default();
        assert_eq!(cfg.data_dir, PathBuf::from("."));
        assert_eq!(cfg.corpus_files.len(), 6);
        assert_eq!(cfg.corpus_files[0], "bible.txt");
        assert_eq!(cfg.image_file, "images.txt");
        assert_eq!(cfg.pause, Duration::from_millis(1200));
    }

    #[test]
    fn builder_methods() {
        let cfg = OracleConfig::default()
            .with_data_dir("/srv/oracle")
            .with_corpus_files(["a.txt", "b.txt"])
            .with_image_file("pics.txt")
            .with_pause_ms(0);
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/oracle"));
        assert_eq!(cfg.corpus_files, vec!["a.txt", "b.txt"]);
        assert_eq!(cfg.image_file, "pics.txt");
        assert!(cfg.pause.is_zero());
    }

    #[test]
    fn sources_follow_config() {
        let cfg = OracleConfig::default()
            .with_data_dir("data")
            .with_corpus_files(["x.txt"]);
        let sources = cfg.sources();
        assert_eq!(sources.dir(), std::path::Path::new("data"));
        assert_eq!(sources.corpus_files(), ["x.txt".to_string()]);
        assert_eq!(sources.image_file(), "images.txt");
    }
}
