//! Conversion between text and [`Instant`] via chrono strftime
//! patterns.

use crate::Instant;
use crate::consts::{DATE_ONLY_PATTERN, DATE_TIME_MILLIS_PATTERN, DATE_TIME_PATTERN};
use crate::prelude::*;
use crate::zone::Zone;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::Write as _;

/// Error type for pattern-driven conversion.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PatternError {
    /// The pattern itself is malformed.
    #[display(fmt = "Invalid pattern: {pattern}")]
    InvalidPattern { pattern: String },
    /// The text does not resolve against the pattern.
    #[display(fmt = "Text '{text}' does not match pattern '{pattern}'")]
    Unmatched { text: String, pattern: String },
}

impl std::error::Error for PatternError {}

/// Parses `text` against a strftime `pattern`.
///
/// Tries, in order: an offset-aware datetime, a naive datetime (read
/// as UTC), a date (at midnight), and a time (on the epoch date), so
/// patterns carrying only some fields still resolve, with the missing
/// fields taken from the epoch.
///
/// # Errors
/// Returns `PatternError::InvalidPattern` when `pattern` is malformed
/// and `PatternError::Unmatched` when `text` does not resolve.
pub fn try_parse(text: &str, pattern: &str) -> Result<Instant, PatternError> {
    if let Ok(at) = DateTime::parse_from_str(text, pattern) {
        return Ok(Instant::from_millis(at.timestamp_millis()));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(text, pattern) {
        return Ok(Instant::from_naive_utc(at));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
        return Ok(Instant::from_naive_utc(date.and_time(NaiveTime::MIN)));
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, pattern) {
        let epoch_date = Instant::EPOCH.naive_utc().date();
        return Ok(Instant::from_naive_utc(epoch_date.and_time(time)));
    }

    if pattern_renders(pattern) {
        Err(PatternError::Unmatched {
            text: text.to_owned(),
            pattern: pattern.to_owned(),
        })
    } else {
        Err(PatternError::InvalidPattern {
            pattern: pattern.to_owned(),
        })
    }
}

/// Parses `text` against `pattern`, returning `None` when it does not
/// resolve. The cause is logged at debug level; this never panics.
pub fn parse(text: &str, pattern: &str) -> Option<Instant> {
    match try_parse(text, pattern) {
        Ok(instant) => Some(instant),
        Err(err) => {
            log::debug!("{err}");
            None
        }
    }
}

/// [`parse`] with a caller-supplied fallback for unresolvable text.
pub fn parse_or(text: &str, pattern: &str, default: Instant) -> Instant {
    parse(text, pattern).unwrap_or(default)
}

/// [`parse`] falling back to the epoch instant.
pub fn parse_or_epoch(text: &str, pattern: &str) -> Instant {
    parse_or(text, pattern, Instant::EPOCH)
}

/// True when `pattern` renders a probe instant without error.
fn pattern_renders(pattern: &str) -> bool {
    let mut buf = String::new();
    write!(buf, "{}", Instant::EPOCH.datetime_utc().format(pattern)).is_ok()
}

impl Instant {
    /// Renders this instant under `pattern` on the UTC calendar. An
    /// invalid pattern renders as the empty string.
    pub fn to_text(self, pattern: &str) -> String {
        self.to_text_in(pattern, Zone::UTC)
    }

    /// Renders this instant under `pattern` on the given zone's
    /// calendar. An invalid pattern renders as the empty string.
    pub fn to_text_in(self, pattern: &str, zone: Zone) -> String {
        let local = zone.tz().from_utc_datetime(&self.naive_utc());
        let mut out = String::new();
        if write!(out, "{}", local.format(pattern)).is_err() {
            out.clear();
        }
        out
    }

    /// Fixed `2023-06-15 10:20:30[.123]` rendering, UTC.
    pub fn to_datetime_text(self, with_millis: bool) -> String {
        self.to_datetime_text_in(with_millis, Zone::UTC)
    }

    /// Fixed `2023-06-15 10:20:30[.123]` rendering on the given zone's
    /// calendar.
    pub fn to_datetime_text_in(self, with_millis: bool, zone: Zone) -> String {
        let pattern = if with_millis {
            DATE_TIME_MILLIS_PATTERN
        } else {
            DATE_TIME_PATTERN
        };
        self.to_text_in(pattern, zone)
    }

    /// Compact `20230615` rendering, UTC.
    pub fn to_date_text(self) -> String {
        self.to_text(DATE_ONLY_PATTERN)
    }

    /// [`Instant::to_date_text`] as a number: `20230615` for June 15,
    /// 2023. Zero when the rendering is not numeric.
    pub fn date_int(self) -> i32 {
        self.to_date_text().parse().unwrap_or_default()
    }
}
