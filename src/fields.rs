//! Calendar-field views of an [`Instant`].
//!
//! The decomposition is rebuilt from scratch on every call and
//! discarded afterwards; no calendar state is shared between calls.

use crate::Instant;
use crate::zone::Zone;
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// A read-only snapshot of the calendar fields of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    /// Calendar year.
    pub year: i32,
    /// Month of year, 1-based (January = 1).
    pub month: u32,
    /// Day of month, 1-based.
    pub day_of_month: u32,
    /// Day of week, 0-based with Sunday = 0.
    pub day_of_week: u32,
    /// Day of year, 1-based.
    pub day_of_year: u32,
    /// Hour on the 12-hour clock, 0..=11.
    pub hour: u32,
    /// Hour on the 24-hour clock, 0..=23.
    pub hour_of_day: u32,
    /// Minute of hour, 0..=59.
    pub minute: u32,
    /// Second of minute, 0..=59.
    pub second: u32,
    /// Millisecond of second, 0..=999.
    pub millisecond: u32,
    /// Week of year; weeks run Sunday through Saturday and week 1
    /// contains January 1.
    pub week_of_year: u32,
}

impl Fields {
    /// Decomposes an instant on the UTC calendar.
    pub fn of(instant: Instant) -> Self {
        Self::decompose(instant.naive_utc())
    }

    /// Decomposes an instant on the given zone's calendar.
    pub fn in_zone(instant: Instant, zone: Zone) -> Self {
        let local = zone.tz().from_utc_datetime(&instant.naive_utc());
        Self::decompose(local.naive_local())
    }

    fn decompose(at: NaiveDateTime) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
            day_of_month: at.day(),
            day_of_week: at.weekday().num_days_from_sunday(),
            day_of_year: at.ordinal(),
            hour: at.hour() % 12,
            hour_of_day: at.hour(),
            minute: at.minute(),
            second: at.second(),
            millisecond: at.nanosecond() / 1_000_000,
            week_of_year: week_number(at.date()),
        }
    }
}

/// A calendar field that arithmetic operations can shift by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

/// Week of year for `date` with Sunday as the first day of the week and
/// week 1 containing January 1. chrono only ships ISO week numbers, so
/// the number is derived from its day-of-year and weekday.
pub(crate) fn week_number(date: NaiveDate) -> u32 {
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let offset = jan1.weekday().num_days_from_sunday();
    (date.ordinal0() + offset) / 7 + 1
}

impl Instant {
    /// Calendar year, UTC.
    pub fn year(self) -> i32 {
        Fields::of(self).year
    }

    /// Month of year, 1-based, UTC.
    pub fn month(self) -> u32 {
        Fields::of(self).month
    }

    /// Day of month, UTC.
    pub fn day_of_month(self) -> u32 {
        Fields::of(self).day_of_month
    }

    /// Day of week with Sunday = 0, UTC.
    pub fn day_of_week(self) -> u32 {
        Fields::of(self).day_of_week
    }

    /// Day of year, 1-based, UTC.
    pub fn day_of_year(self) -> u32 {
        Fields::of(self).day_of_year
    }

    /// Hour on the 12-hour clock, 0..=11, UTC.
    pub fn hour(self) -> u32 {
        Fields::of(self).hour
    }

    /// Hour on the 24-hour clock, UTC.
    pub fn hour_of_day(self) -> u32 {
        Fields::of(self).hour_of_day
    }

    /// Minute of hour, UTC.
    pub fn minute(self) -> u32 {
        Fields::of(self).minute
    }

    /// Second of minute, UTC.
    pub fn second(self) -> u32 {
        Fields::of(self).second
    }

    /// Millisecond of second, UTC.
    pub fn millisecond(self) -> u32 {
        Fields::of(self).millisecond
    }

    /// Week of year, UTC. See [`Fields::week_of_year`] for the
    /// convention.
    pub fn week_of_year(self) -> u32 {
        Fields::of(self).week_of_year
    }

    /// Full field snapshot on the UTC calendar.
    pub fn fields(self) -> Fields {
        Fields::of(self)
    }

    /// Full field snapshot on the given zone's calendar.
    pub fn fields_in(self, zone: Zone) -> Fields {
        Fields::in_zone(self, zone)
    }
}
