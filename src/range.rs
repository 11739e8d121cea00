//! Inclusive day and week counting over instant ranges.

use crate::Instant;
use crate::consts::ONE_DAY;
use crate::fields::week_number;
use chrono::{Datelike, NaiveDate};

/// Inclusive number of days touched by `start..=end`: the whole-day
/// span between `start`'s start of day and `end`'s end of day.
pub fn days_in_range(start: Instant, end: Instant) -> i64 {
    let first = start.start_of_day();
    let last = end.end_of_day();
    last.millis().saturating_add(1).saturating_sub(first.millis()) / ONE_DAY
}

/// Inclusive number of week rows spanned by the months containing
/// `start` and `end`. Both ends are month-aligned first and their week
/// numbers differenced; when the range crosses into a new year and the
/// numbering wraps, the start week is re-read from December 31 of the
/// prior year and the end week is lifted by the end year's maximum
/// week number.
pub fn weeks_in_range(start: Instant, end: Instant) -> i64 {
    let start_date = start.month_first_day().naive_utc().date();
    let end_date = end.month_end_day().naive_utc().date();

    let mut start_week = i64::from(week_number(start_date));
    let mut end_week = i64::from(week_number(end_date));
    if end_week < start_week {
        start_week = i64::from(prior_december_week(start_date.year()));
        end_week += i64::from(max_week_of_year(end_date.year()));
    }
    end_week - start_week + 1
}

/// Week number of December 31 of the year before `year`.
fn prior_december_week(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year - 1, 12, 31) {
        Some(date) => week_number(date),
        None => 1,
    }
}

/// Highest week number that `year` reaches.
fn max_week_of_year(year: i32) -> u32 {
    match NaiveDate::from_ymd_opt(year, 12, 31) {
        Some(date) => week_number(date),
        None => 1,
    }
}

impl Instant {
    /// Week of year with a year-boundary correction: when the first
    /// moment of the instant's year sits after the instant itself (a
    /// calendar-library edge near December 31 / January 1), the week
    /// of December 31 of the prior year is used instead.
    pub fn weeks_of_year(self) -> u32 {
        let date = self.naive_utc().date();
        if self.year_first_day() > self {
            prior_december_week(date.year())
        } else {
            week_number(date)
        }
    }
}
