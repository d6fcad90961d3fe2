//! Terminal widget for The Literary Oracle.
//!
//! One screen: a header, a question input, and a result area that shows the
//! idle footer, a warning, a data error, or the oracle card.

pub mod app;
pub mod terminal;
