//! Seeded selection of one quotation and one image.

use rand::Rng;
use tracing::trace;

use super::clock::Clock;
use super::seed::{FateSeed, seed_string};
use crate::corpus::{Corpus, ImageCatalog};
use crate::error::{OracleError, OracleResult};

/// One quotation line and one image URL, borrowed from their pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// The chosen corpus line, unmodified.
    pub text: &'a str,
    /// The chosen image URL, unmodified.
    pub image: &'a str,
}

/// Draw from both pools using the generator seeded by `seed`.
///
/// The corpus index is drawn first and the image index second, from the same
/// stream, so a given seed always yields the same pair.
pub fn draw<'a>(
    seed: &FateSeed,
    corpus: &'a Corpus,
    catalog: &'a ImageCatalog,
) -> OracleResult<Selection<'a>> {
    if corpus.is_empty() {
        return Err(OracleError::EmptyCorpus);
    }

    let mut rng = seed.rng();
    let text = &corpus.lines()[rng.random_range(0..corpus.len())];
    let image = &catalog.urls()[rng.random_range(0..catalog.len())];

    Ok(Selection { text, image })
}

/// Select a quotation and image for `question`, seeded by the question and
/// the clock's current time.
///
/// The same question asked at different instants gets independent draws.
pub fn select<'a>(
    question: &str,
    corpus: &'a Corpus,
    catalog: &'a ImageCatalog,
    clock: &dyn Clock,
) -> OracleResult<Selection<'a>> {
    if corpus.is_empty() {
        return Err(OracleError::EmptyCorpus);
    }

    let seed_text = seed_string(question, clock.now());
    let seed = FateSeed::from_seed_string(&seed_text);
    trace!(seed = %seed, "drawing from seed string {seed_text:?}");

    draw(&seed, corpus, catalog)
}
