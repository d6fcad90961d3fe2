//! Process-lifetime memoization of loaded oracle data.
//!
//! Data files are treated as immutable while the process runs, so entries are
//! never invalidated. Callers receive shared `Arc`s; the data behind them is
//! read-only and safe to hand to any number of concurrent readers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::OracleData;
use super::loader::{self, CorpusSources};
use crate::error::OracleResult;

/// Memoizes [`loader::load`] by [`CorpusSources`].
#[derive(Debug, Default)]
pub struct CorpusCache {
    entries: Mutex<HashMap<CorpusSources, Arc<OracleData>>>,
}

impl CorpusCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created on first use.
    pub fn global() -> &'static CorpusCache {
        static GLOBAL: OnceLock<CorpusCache> = OnceLock::new();
        GLOBAL.get_or_init(CorpusCache::new)
    }

    /// Load `sources`, reading disk only the first time they are seen.
    ///
    /// The lock is held across the first read, so concurrent callers asking
    /// for the same sources wait for one load instead of each reading disk.
    /// Failed loads are not cached.
    pub fn load(&self, sources: &CorpusSources) -> OracleResult<Arc<OracleData>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(data) = entries.get(sources) {
            debug!(dir = %sources.dir().display(), "oracle data cache hit");
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(loader::load(sources)?);
        entries.insert(sources.clone(), Arc::clone(&data));
        Ok(data)
    }

    /// Number of distinct source sets loaded so far.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
