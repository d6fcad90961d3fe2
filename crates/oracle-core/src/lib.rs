//! Core of The Literary Oracle.
//!
//! Loads a quotation corpus and an image catalog from line-oriented text
//! files, draws one of each with a generator seeded by a SHA-256 hash of the
//! question and the time it was asked, and splits the quotation's trailing
//! `(source)` annotation into a label.

pub mod annotation;
pub mod answer;
pub mod config;
pub mod consult;
pub mod copy;
pub mod corpus;
pub mod error;
pub mod oracle;

pub use answer::OracleAnswer;
pub use config::OracleConfig;
pub use consult::Oracle;
pub use corpus::cache::CorpusCache;
pub use corpus::loader::{CorpusSources, load};
pub use corpus::{Corpus, DEFAULT_IMAGE_URL, ImageCatalog, OracleData};
pub use error::{OracleError, OracleResult};
