//! Display and parsing helpers shared by the view layer.
//!
//! Dates are stored as ISO `YYYY-MM-DD` but shown to office staff as
//! `DD.MM.YYYY`. Input accepts either form so dates can be typed the way they
//! appear on paper forms.
//!
//! ## Examples
//!
//! ```rust
//! use kindergarten::libs::formatter::{format_date, full_name, parse_date, DEFAULT_DATE_FORMAT};
//!
//! let date = parse_date("01.05.2019").unwrap();
//! assert_eq!(format_date(&date, DEFAULT_DATE_FORMAT), "01.05.2019");
//! assert_eq!(full_name("Petrov", "Ivan", None), "Petrov Ivan");
//! ```

use crate::db::error::{DbError, Result};
use chrono::NaiveDate;

/// Display pattern used when the configuration does not override it.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Input patterns tried in order by [`parse_date`].
const INPUT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

pub fn format_date(date: &NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

pub fn format_optional_date(date: Option<&NaiveDate>, pattern: &str) -> String {
    date.map(|d| format_date(d, pattern)).unwrap_or_default()
}

/// Parses a calendar date typed by a user.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(input, pattern).ok())
        .ok_or_else(|| DbError::Validation(format!("'{}' is not a valid date (expected YYYY-MM-DD or DD.MM.YYYY)", input)))
}

/// Returns true when `input` parses with [`parse_date`].
pub fn validate_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

/// Joins name parts as "Last First Middle", skipping a blank middle name.
pub fn full_name(last_name: &str, first_name: &str, middle_name: Option<&str>) -> String {
    match middle_name.map(str::trim).filter(|m| !m.is_empty()) {
        Some(middle) => format!("{} {} {}", last_name, first_name, middle),
        None => format!("{} {}", last_name, first_name),
    }
}

pub fn format_age(years: i32) -> String {
    match years {
        1 => "1 year".to_string(),
        n => format!("{} years", n),
    }
}

/// Renders an optional text column, using a dash for missing values.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
