//! Time source for seeding draws.

use chrono::{DateTime, Utc};

/// Supplies the instant a question is asked.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock fixed at `micros` microseconds after the Unix epoch.
    ///
    /// Values outside chrono's representable range fall back to the epoch.
    pub fn from_micros(micros: i64) -> Self {
        Self(DateTime::<Utc>::from_timestamp_micros(micros).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fractional Unix seconds with microsecond resolution, e.g. `1760700000.000042`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    format!("{}.{:06}", at.timestamp(), at.timestamp_subsec_micros())
}
