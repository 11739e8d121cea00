//! Calendar-aware arithmetic on [`Instant`].

use crate::Instant;
use crate::consts::{ONE_DAY, ONE_HOUR, ONE_MIN, ONE_SEC, ONE_WEEK};
use crate::fields::Field;
use chrono::Months;

impl Instant {
    /// Adds `amount` of `field` on the UTC calendar. Month and year
    /// shifts clamp the day-of-month (January 31 plus one month is the
    /// last day of February); the remaining fields are exact
    /// millisecond shifts. Unrepresentable results fall back to the
    /// receiver.
    pub fn add_field(self, field: Field, amount: i32) -> Instant {
        let amount = i64::from(amount);
        match field {
            Field::Year => self.add_months(amount * 12),
            Field::Month => self.add_months(amount),
            Field::Week => self.plus_millis(amount * ONE_WEEK),
            Field::Day => self.plus_millis(amount * ONE_DAY),
            Field::Hour => self.plus_millis(amount * ONE_HOUR),
            Field::Minute => self.plus_millis(amount * ONE_MIN),
            Field::Second => self.plus_millis(amount * ONE_SEC),
            Field::Millisecond => self.plus_millis(amount),
        }
    }

    /// Adds `count` of `field` to the current clock time. The receiver
    /// does not enter the computation: the shift is applied to
    /// `Instant::now()`, not to `self`.
    pub fn shift_by_count(self, field: Field, count: i32) -> Instant {
        Instant::now().add_field(field, count)
    }

    /// Start of day of the first day of the month `count` months from
    /// now (clock-relative, see [`Instant::shift_by_count`]).
    pub fn month_start_by_count(self, count: i32) -> Instant {
        self.shift_by_count(Field::Month, count)
            .month_first_day()
            .start_of_day()
    }

    /// End of day of the last day of the month `count` months from now
    /// (clock-relative, see [`Instant::shift_by_count`]).
    pub fn month_end_by_count(self, count: i32) -> Instant {
        self.shift_by_count(Field::Month, count)
            .month_end_day()
            .end_of_day()
    }

    /// Milliseconds elapsed from this instant to the current clock
    /// time; negative for instants in the future.
    pub fn elapsed_millis(self) -> i64 {
        Instant::now().millis() - self.millis()
    }

    fn add_months(self, months: i64) -> Instant {
        let naive = self.naive_utc();
        let shifted = if months >= 0 {
            u32::try_from(months)
                .ok()
                .and_then(|m| naive.checked_add_months(Months::new(m)))
        } else {
            u32::try_from(-months)
                .ok()
                .and_then(|m| naive.checked_sub_months(Months::new(m)))
        };
        Instant::from_naive_utc(shifted.unwrap_or(naive))
    }
}
