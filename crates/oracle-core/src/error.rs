//! Error types for the oracle engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors that can end a single oracle submission.
///
/// Missing data files and an empty image list are not errors: the former
/// contribute nothing and the latter falls back to a built-in image.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The user submitted without typing a question.
    #[error("a question is required")]
    EmptyQuestion,

    /// No quotation lines were loaded from any corpus file.
    #[error("no quotations loaded")]
    EmptyCorpus,

    /// A data file exists but could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl OracleError {
    /// Whether this error is a user input problem rather than a data problem.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyQuestion)
    }
}
