//! Long-form calendar date formatting.
//!
//! Dates are rendered in the fixed `en-US` long style (`January 1, 2024`).
//! Chrono's default month names are English, so no locale data is loaded.

use chrono::NaiveDate;

/// `strftime` pattern producing `Month Day, Year` without zero padding.
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a calendar date as `Month Day, Year`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use presentation_utils::format_date;
///
/// let date = NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date");
/// assert_eq!(format_date(date), "December 10, 1815");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}
