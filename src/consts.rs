/// One second in milliseconds
pub const ONE_SEC: i64 = 1000;

/// One minute in milliseconds
pub const ONE_MIN: i64 = ONE_SEC * 60;

/// One hour in milliseconds
pub const ONE_HOUR: i64 = ONE_MIN * 60;

/// One day in milliseconds
pub const ONE_DAY: i64 = ONE_HOUR * 24;

/// One week in milliseconds
pub const ONE_WEEK: i64 = ONE_DAY * 7;

/// Thirty days in milliseconds.
/// Calendar-blind: real months are 28-31 days long.
pub const ONE_MONTH: i64 = ONE_DAY * 30;

/// Twelve 30-day months in milliseconds (360 days).
/// Calendar-blind: real years are 365 or 366 days long.
pub const ONE_YEAR: i64 = ONE_MONTH * 12;

/// Months per quarter
pub const MONTHS_PER_QUARTER: i32 = 3;

/// Pattern for `2023-06-15 10:20:30` style text
pub const DATE_TIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Pattern for `2023-06-15 10:20:30.123` style text
pub const DATE_TIME_MILLIS_PATTERN: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Pattern for compact `20230615` style text
pub const DATE_ONLY_PATTERN: &str = "%Y%m%d";
