mod arith;
mod boundary;
mod consts;
mod fields;
mod format;
mod prelude;
mod range;
mod zone;

pub use chrono::Weekday;
pub use consts::*;
pub use fields::{Field, Fields};
pub use format::{PatternError, parse, parse_or, parse_or_epoch, try_parse};
pub use range::{days_in_range, weeks_in_range};
pub use zone::{Zone, ZoneError};

use crate::prelude::*;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in time, stored as milliseconds since the Unix epoch.
/// Immutable: every operation in this crate returns a new `Instant`
/// and leaves the receiver untouched.
///
/// Calendar-field views of an `Instant` are built per call (see
/// [`Fields`]) and never shared, so the crate holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Instant(i64);

impl Instant {
    /// The zero instant, 1970-01-01T00:00:00.000Z.
    pub const EPOCH: Self = Self(0);

    /// The current clock time.
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Creates an `Instant` from epoch milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the epoch-millisecond value.
    #[inline]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// UTC view of this instant. Instants outside chrono's
    /// representable range degrade to the epoch.
    pub(crate) fn datetime_utc(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    pub(crate) fn naive_utc(self) -> NaiveDateTime {
        self.datetime_utc().naive_utc()
    }

    pub(crate) fn from_naive_utc(naive: NaiveDateTime) -> Self {
        Self(naive.and_utc().timestamp_millis())
    }

    /// Saturating millisecond shift.
    pub(crate) fn plus_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive_utc().format(DATE_TIME_MILLIS_PATTERN))
    }
}
