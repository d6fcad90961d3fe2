//! One question in, one answer out.
//!
//! Each call to [`Oracle::consult`] is an independent submission: validate
//! the question, validate the corpus, select, split. Nothing carries over
//! between calls except the shared, immutable data.

use std::sync::Arc;

use tracing::info;

use crate::answer::OracleAnswer;
use crate::config::OracleConfig;
use crate::corpus::OracleData;
use crate::corpus::cache::CorpusCache;
use crate::error::{OracleError, OracleResult};
use crate::oracle::{Clock, SystemClock, select};

/// An oracle bound to loaded data and a clock.
pub struct Oracle {
    data: Arc<OracleData>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Oracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Oracle")
            .field("quotations", &self.data.corpus.len())
            .field("images", &self.data.catalog.len())
            .finish_non_exhaustive()
    }
}

impl Oracle {
    /// Create an oracle over already-loaded data, using the system clock.
    pub fn new(data: Arc<OracleData>) -> Self {
        Self {
            data,
            clock: Box::new(SystemClock),
        }
    }

    /// Load (or reuse) the data named by `config` from the process-wide cache.
    pub fn from_config(config: &OracleConfig) -> OracleResult<Self> {
        Self::from_cache(CorpusCache::global(), config)
    }

    /// Load (or reuse) the data named by `config` from `cache`.
    pub fn from_cache(cache: &CorpusCache, config: &OracleConfig) -> OracleResult<Self> {
        Ok(Self::new(cache.load(&config.sources())?))
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The data this oracle draws from.
    pub fn data(&self) -> &OracleData {
        &self.data
    }

    /// Answer `question`.
    ///
    /// An empty question is rejected before the corpus is looked at. Any
    /// typed text counts, whitespace included, and is hashed exactly as given.
    pub fn consult(&self, question: &str) -> OracleResult<OracleAnswer> {
        if question.is_empty() {
            return Err(OracleError::EmptyQuestion);
        }
        if self.data.corpus.is_empty() {
            return Err(OracleError::EmptyCorpus);
        }

        let selection = select(
            question,
            &self.data.corpus,
            &self.data.catalog,
            self.clock.as_ref(),
        )?;
        let answer = OracleAnswer::from_selection(selection);
        info!(source = %answer.source_label, "oracle consulted");
        Ok(answer)
    }
}
