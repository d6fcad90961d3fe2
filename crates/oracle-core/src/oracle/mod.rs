//! Hash-seeded selection.
//!
//! A question and the instant it was asked are hashed into a [`FateSeed`];
//! the seed drives a generator that draws one quotation and one image.

pub mod clock;
pub mod seed;
pub mod selector;

pub use clock::{Clock, FixedClock, SystemClock};
pub use seed::{FateSeed, seed_string};
pub use selector::{Selection, draw, select};
