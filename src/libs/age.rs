//! Age arithmetic on birth dates.

use chrono::{Datelike, NaiveDate};

/// Average length of a year in days, used for fractional ages.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Whole years elapsed between `birth_date` and `today`.
///
/// The count increases on the birthday itself. Dates in the future yield 0.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    if today <= birth_date {
        return 0;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0)
}

/// Age in fractional years, as used for averages.
pub fn fractional_age_on(birth_date: NaiveDate, today: NaiveDate) -> f64 {
    (today - birth_date).num_days() as f64 / DAYS_PER_YEAR
}

/// Mean fractional age rounded to one decimal place; 0.0 for an empty slice.
pub fn average_age_on(birth_dates: &[NaiveDate], today: NaiveDate) -> f64 {
    if birth_dates.is_empty() {
        return 0.0;
    }
    let total: f64 = birth_dates.iter().map(|b| fractional_age_on(*b, today)).sum();
    round_one_decimal(total / birth_dates.len() as f64)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
