//! Period boundaries: first/last instants of the day, week, month,
//! quarter and year containing a given [`Instant`], on the UTC
//! calendar.

use crate::Instant;
use crate::consts::{MONTHS_PER_QUARTER, ONE_DAY, ONE_WEEK};
use chrono::{Datelike, Months, NaiveDate, NaiveTime, Weekday};

impl Instant {
    /// Midnight at the start of this instant's day.
    pub fn start_of_day(self) -> Instant {
        Instant::from_naive_utc(self.naive_utc().date().and_time(NaiveTime::MIN))
    }

    /// The last millisecond of this instant's day, 23:59:59.999.
    pub fn end_of_day(self) -> Instant {
        let naive = self.naive_utc();
        let end = naive.date().and_hms_milli_opt(23, 59, 59, 999).unwrap_or(naive);
        Instant::from_naive_utc(end)
    }

    /// The Sunday of the week containing this instant, time-of-day
    /// preserved.
    pub fn week_first_day(self) -> Instant {
        self.week_first_day_with(Weekday::Sun, false)
    }

    /// Day `first_day` of the Sunday-through-Saturday week containing
    /// this instant, time-of-day preserved.
    ///
    /// With `grid_display` set, an input that already sits on
    /// `first_day` moves one week back, so a month whose first date
    /// opens the week renders on the second grid row instead of the
    /// first.
    pub fn week_first_day_with(self, first_day: Weekday, grid_display: bool) -> Instant {
        let dow = i64::from(self.naive_utc().weekday().num_days_from_sunday());
        let target = i64::from(first_day.num_days_from_sunday());
        let first = self.plus_millis((target - dow) * ONE_DAY);
        if grid_display && first == self {
            self.plus_millis(-ONE_WEEK)
        } else {
            first
        }
    }

    /// The Saturday of the week containing this instant, time-of-day
    /// preserved.
    pub fn week_last_day(self) -> Instant {
        self.week_last_day_with(Weekday::Sat)
    }

    /// Day `last_day` of the Sunday-through-Saturday week containing
    /// this instant, pushed one week forward when it would land before
    /// the input, so the result is always >= the input.
    pub fn week_last_day_with(self, last_day: Weekday) -> Instant {
        let dow = i64::from(self.naive_utc().weekday().num_days_from_sunday());
        let target = i64::from(last_day.num_days_from_sunday());
        let last = self.plus_millis((target - dow) * ONE_DAY);
        if last >= self { last } else { last.plus_millis(ONE_WEEK) }
    }

    /// Day 1 of the month containing this instant, time-of-day
    /// preserved.
    pub fn month_first_day(self) -> Instant {
        let naive = self.naive_utc();
        Instant::from_naive_utc(naive.with_day(1).unwrap_or(naive))
    }

    /// The last day of the month containing this instant, time-of-day
    /// preserved.
    pub fn month_end_day(self) -> Instant {
        let naive = self.naive_utc();
        let last = days_in_month(naive.year(), naive.month());
        Instant::from_naive_utc(naive.with_day(last).unwrap_or(naive))
    }

    /// Day 1 of the given year/month, with this instant's time-of-day.
    /// `month` is 1-based; out-of-range values roll over into adjacent
    /// years (month 13 is January of `year + 1`).
    pub fn month_first_day_of(self, year: i32, month: i32) -> Instant {
        let (y, m) = normalize_month(year, month);
        match NaiveDate::from_ymd_opt(y, m, 1) {
            Some(date) => Instant::from_naive_utc(date.and_time(self.naive_utc().time())),
            None => self,
        }
    }

    /// The last day of the given year/month, with this instant's
    /// time-of-day. Month numbering as in
    /// [`Instant::month_first_day_of`].
    pub fn month_end_day_of(self, year: i32, month: i32) -> Instant {
        let (y, m) = normalize_month(year, month);
        match NaiveDate::from_ymd_opt(y, m, days_in_month(y, m)) {
            Some(date) => Instant::from_naive_utc(date.and_time(self.naive_utc().time())),
            None => self,
        }
    }

    /// First day of the quarter containing this instant; quarters are
    /// the fixed month buckets 1-3, 4-6, 7-9 and 10-12.
    pub fn quarter_first_day(self) -> Instant {
        let naive = self.naive_utc();
        let quarter = naive.month0() as i32 / MONTHS_PER_QUARTER;
        self.month_first_day_of(naive.year(), quarter * MONTHS_PER_QUARTER + 1)
    }

    /// Last day of the quarter containing this instant.
    pub fn quarter_end_day(self) -> Instant {
        let naive = self.naive_utc();
        let quarter = naive.month0() as i32 / MONTHS_PER_QUARTER;
        self.month_end_day_of(naive.year(), (quarter + 1) * MONTHS_PER_QUARTER)
    }

    /// January 1, 00:00:00.000 of this instant's year.
    pub fn year_first_day(self) -> Instant {
        match NaiveDate::from_ymd_opt(self.naive_utc().year(), 1, 1) {
            Some(date) => Instant::from_naive_utc(date.and_time(NaiveTime::MIN)),
            None => self,
        }
    }

    /// December 31, 23:59:59.999 of this instant's year.
    pub fn year_end_day(self) -> Instant {
        let end = NaiveDate::from_ymd_opt(self.naive_utc().year(), 12, 31)
            .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999));
        match end {
            Some(end) => Instant::from_naive_utc(end),
            None => self,
        }
    }

    /// Day 1 of the following month, time-of-day preserved. The day is
    /// pinned to 1 before the month is added, so month lengths never
    /// clamp the result.
    pub fn next_month_start(self) -> Instant {
        let naive = self.naive_utc();
        let pinned = naive.with_day(1).unwrap_or(naive);
        Instant::from_naive_utc(pinned.checked_add_months(Months::new(1)).unwrap_or(pinned))
    }
}

/// Rolls a 1-based month into `1..=12`, carrying whole years.
fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let month0 = i64::from(month) - 1;
    let year = i64::from(year) + month0.div_euclid(12);
    let month = (month0.rem_euclid(12) + 1) as u32;
    (year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32, month)
}

/// Month length delegated to chrono: the day before day 1 of the
/// following month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month >= 12 {
        year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next.and_then(|d| d.pred_opt()).map_or(31, |d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2023-06-15T10:20:30.123Z, a Thursday
    const JUN_15_2023: i64 = 1_686_824_430_123;
    // 2024-03-15T00:00:00.000Z, a Friday
    const MAR_15_2024: i64 = 1_710_460_800_000;

    fn jun_15() -> Instant {
        Instant::from_millis(JUN_15_2023)
    }

    #[test]
    fn test_start_of_day() {
        let start = jun_15().start_of_day();
        assert!(start <= jun_15());
        assert_eq!(start.to_string(), "2023-06-15 00:00:00.000");
        assert_eq!(start.hour_of_day(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
        assert_eq!(start.millisecond(), 0);
    }

    #[test]
    fn test_end_of_day() {
        let end = jun_15().end_of_day();
        assert!(end >= jun_15());
        assert_eq!(end.to_string(), "2023-06-15 23:59:59.999");
    }

    #[test]
    fn test_day_brackets_input() {
        for millis in [0, JUN_15_2023, MAR_15_2024] {
            let instant = Instant::from_millis(millis);
            assert!(instant.start_of_day() <= instant);
            assert!(instant.end_of_day() >= instant);
        }
    }

    #[test]
    fn test_week_first_day_default() {
        let first = jun_15().week_first_day();
        assert!(first <= jun_15());
        // the Sunday before, same time of day
        assert_eq!(first.to_string(), "2023-06-11 10:20:30.123");
        assert_eq!(first.day_of_week(), 0);
    }

    #[test]
    fn test_week_last_day_default() {
        let last = jun_15().week_last_day();
        assert!(last >= jun_15());
        // the Saturday after, same time of day
        assert_eq!(last.to_string(), "2023-06-17 10:20:30.123");
        assert_eq!(last.day_of_week(), 6);
    }

    #[test]
    fn test_week_brackets_input() {
        let instant = jun_15();
        assert!(instant.week_first_day() <= instant);
        assert!(instant.week_last_day() >= instant);
    }

    #[test]
    fn test_week_first_day_custom_start() {
        // Monday start from a Thursday lands three days back
        let monday = jun_15().week_first_day_with(Weekday::Mon, false);
        assert_eq!(monday.to_string(), "2023-06-12 10:20:30.123");
    }

    #[test]
    fn test_week_first_day_grid_rule() {
        // 2023-06-11 was a Sunday: already the week's first day
        let sunday = jun_15().plus_millis(-4 * crate::ONE_DAY);
        assert_eq!(sunday.day_of_week(), 0);

        assert_eq!(sunday.week_first_day_with(Weekday::Sun, false), sunday);
        assert_eq!(
            sunday.week_first_day_with(Weekday::Sun, true),
            sunday.plus_millis(-ONE_WEEK)
        );
        // a mid-week input is unaffected by the grid flag
        assert_eq!(
            jun_15().week_first_day_with(Weekday::Sun, true),
            jun_15().week_first_day()
        );
    }

    #[test]
    fn test_week_last_day_rolls_forward() {
        // Wednesday sits before Thursday in the same week, so the
        // result moves to the following Wednesday
        let next_wed = jun_15().week_last_day_with(Weekday::Wed);
        assert!(next_wed >= jun_15());
        assert_eq!(next_wed.to_string(), "2023-06-21 10:20:30.123");
    }

    #[test]
    fn test_month_first_day() {
        let first = jun_15().month_first_day();
        assert!(first <= jun_15());
        assert_eq!(first.day_of_month(), 1);
        assert_eq!(first.to_string(), "2023-06-01 10:20:30.123");
    }

    #[test]
    fn test_month_end_day() {
        let end = jun_15().month_end_day();
        assert!(end >= jun_15());
        assert_eq!(end.to_string(), "2023-06-30 10:20:30.123");
    }

    #[test]
    fn test_month_boundaries_explicit_pair() {
        let base = jun_15();
        assert_eq!(base.month_first_day_of(2024, 2).to_string(), "2024-02-01 10:20:30.123");
        // leap February
        assert_eq!(base.month_end_day_of(2024, 2).to_string(), "2024-02-29 10:20:30.123");
        assert_eq!(base.month_end_day_of(2023, 2).to_string(), "2023-02-28 10:20:30.123");
    }

    #[test]
    fn test_month_boundaries_roll_over() {
        let base = jun_15();
        // month 13 is January of the following year
        assert_eq!(base.month_first_day_of(2023, 13).to_string(), "2024-01-01 10:20:30.123");
        // month 0 is December of the year before
        assert_eq!(base.month_first_day_of(2023, 0).to_string(), "2022-12-01 10:20:30.123");
        assert_eq!(base.month_end_day_of(2023, 14).to_string(), "2024-02-29 10:20:30.123");
    }

    #[test]
    fn test_quarter_boundaries_march() {
        // March belongs to the first quarter
        let instant = Instant::from_millis(MAR_15_2024);
        let first = instant.quarter_first_day();
        let end = instant.quarter_end_day();

        assert!(first <= instant && instant <= end);
        assert_eq!(first.month(), 1);
        assert_eq!(first.day_of_month(), 1);
        assert_eq!(end.month(), 3);
        assert_eq!(end.day_of_month(), 31);
    }

    #[test]
    fn test_quarter_boundaries_june() {
        let first = jun_15().quarter_first_day();
        let end = jun_15().quarter_end_day();

        assert!(first <= jun_15() && jun_15() <= end);
        assert_eq!(first.to_string(), "2023-04-01 10:20:30.123");
        assert_eq!(end.to_string(), "2023-06-30 10:20:30.123");
    }

    #[test]
    fn test_year_boundaries() {
        let first = jun_15().year_first_day();
        let end = jun_15().year_end_day();

        assert!(first <= jun_15() && jun_15() <= end);
        assert_eq!(first.to_string(), "2023-01-01 00:00:00.000");
        assert_eq!(end.to_string(), "2023-12-31 23:59:59.999");
    }

    #[test]
    fn test_next_month_start() {
        assert_eq!(jun_15().next_month_start().to_string(), "2023-07-01 10:20:30.123");

        // December rolls into the next year
        let dec = jun_15().month_first_day_of(2023, 12);
        assert_eq!(dec.next_month_start().to_string(), "2024-01-01 10:20:30.123");

        // day 31 does not clamp the result because the day is pinned first
        let jan_31 = jun_15().month_end_day_of(2023, 1);
        assert_eq!(jan_31.next_month_start().to_string(), "2023-02-01 10:20:30.123");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_boundaries_preserve_time_of_day() {
        let instant = jun_15();
        for shifted in [
            instant.week_first_day(),
            instant.month_first_day(),
            instant.month_end_day(),
            instant.quarter_first_day(),
            instant.next_month_start(),
        ] {
            assert_eq!(shifted.hour_of_day(), 10);
            assert_eq!(shifted.minute(), 20);
            assert_eq!(shifted.second(), 30);
            assert_eq!(shifted.millisecond(), 123);
        }
    }
}
