use chrono::{Datelike, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const MONTHS_IN_QUARTER: i64 = 3;
    pub const MONTHS_IN_YEAR: i64 = 12;
    pub const DAYS_IN_YEAR: f64 = 365.25;
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Whole calendar months elapsed from `from` to `to`.
    /// Day-aware: 2023-01-15 -> 2023-02-14 is 0 months, -> 2023-02-15 is 1.
    /// Negative if `to` precedes `from`.
    pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
        let mut months = (i64::from(to.year()) - i64::from(from.year())) * Self::MONTHS_IN_YEAR
            + (i64::from(to.month()) - i64::from(from.month()));
        if to.day() < from.day() {
            months -= 1;
        }
        months
    }

    /// Fractional years elapsed from `from` to `to` (mean-year length).
    pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
        (to - from).num_days() as f64 / Self::DAYS_IN_YEAR
    }

    /// Abbreviated year label for chart axes, e.g. `'26`.
    pub fn year_label(year: i32) -> String {
        format!("'{:02}", year.rem_euclid(100))
    }
}
