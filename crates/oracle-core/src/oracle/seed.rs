//! Hash-derived seeds.
//!
//! A seed string `"{question}_{timestamp}"` is hashed with SHA-256. The
//! digest, read as a 256-bit big-endian integer, seeds the draw generator.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

use super::clock::format_timestamp;

/// Separator between question and timestamp in the seed string.
pub const SEED_SEPARATOR: &str = "_";

/// Build the seed string for a question asked at `at`.
pub fn seed_string(question: &str, at: DateTime<Utc>) -> String {
    format!("{question}{SEED_SEPARATOR}{}", format_timestamp(at))
}

/// A 256-bit seed produced by hashing a seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FateSeed([u8; 32]);

impl FateSeed {
    /// Wrap raw digest bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// SHA-256 of `seed`'s UTF-8 bytes.
    pub fn from_seed_string(seed: &str) -> Self {
        Self(Sha256::digest(seed.as_bytes()).into())
    }

    /// Seed for `question` asked at `at`.
    pub fn for_query(question: &str, at: DateTime<Utc>) -> Self {
        Self::from_seed_string(&seed_string(question, at))
    }

    /// The digest bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// A fresh generator positioned at the start of this seed's stream.
    pub fn rng(&self) -> StdRng {
        StdRng::from_seed(self.0)
    }
}

impl fmt::Display for FateSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
