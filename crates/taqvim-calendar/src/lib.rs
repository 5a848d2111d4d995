//! Persian (Jalaali) calendar arithmetic for taqvim.
//!
//! Conversion follows the break-table algorithm used by `jalaali-js` and
//! `moment-jalaali`, on top of chrono's Gregorian [`NaiveDate`](chrono::NaiveDate).

pub mod date;
pub mod digits;
pub mod error;
pub mod format;
pub mod jalali;
pub mod parse;

pub use date::{DayIter, PersianDate, Ymd};
pub use digits::{render_digits, to_ascii_digits, to_persian_digits};
pub use error::TaqvimError;
pub use format::{format_date, format_date_localized, DEFAULT_FORMAT};
pub use jalali::{days_in_month, days_in_year, is_leap_year, MAX_YEAR, MIN_YEAR};
pub use parse::{is_valid_date_string, parse_input};

use chrono::NaiveDate;

/// Converts a Persian date to its Gregorian equivalent.
pub fn to_gregorian(date: &PersianDate) -> NaiveDate {
    date.to_gregorian()
}

/// Converts a Gregorian date to the Persian calendar.
///
/// # Errors
/// Returns `GregorianOutOfRange` outside the supported years.
pub fn to_persian(date: NaiveDate) -> Result<PersianDate, TaqvimError> {
    PersianDate::from_gregorian(date)
}
