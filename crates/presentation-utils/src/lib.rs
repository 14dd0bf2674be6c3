//! Presentation helpers shared by the user profile views.
//!
//! The crate is independent of the profile domain types so it can be reused
//! by any view that needs human-readable dates or simple number summaries.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use presentation_utils::{SAMPLE_NUMBERS, doubled, format_date, sum};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
//! assert_eq!(format_date(date), "January 1, 2024");
//! assert_eq!(doubled(&SAMPLE_NUMBERS), vec![2, 4, 6, 8, 10]);
//! assert_eq!(sum(&SAMPLE_NUMBERS), 15);
//! ```

mod date;
mod numbers;

pub use date::{LONG_DATE_FORMAT, format_date};
pub use numbers::{NumberStats, SAMPLE_NUMBERS, calculate_stats, doubled, sum};
