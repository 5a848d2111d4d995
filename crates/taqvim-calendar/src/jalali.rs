//! Jalaali year parameters from the break table (Borkowski's algorithm).
//!
//! Every Persian year is mapped to the Gregorian year containing its first
//! day and the March day of Nowruz. Month offsets inside a year are fixed, so
//! these two numbers plus the leap position are all conversion needs.

use chrono::{Datelike, Duration, NaiveDate};
use std::cell::RefCell;

use crate::error::TaqvimError;

/// Minimum supported Persian year.
pub const MIN_YEAR: i32 = -61;
/// Maximum supported Persian year.
pub const MAX_YEAR: i32 = 3177;

/// Years in which the 33-year leap cycle shifts.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Day count from Nowruz to the first day of the seventh month.
const FIRST_HALF_DAYS: i64 = 186;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearInfo {
    /// Years since the last leap year; 0 means this year is leap.
    pub leap: i32,
    /// Gregorian year in which this Persian year begins.
    pub gy: i32,
    /// Day of March on which this Persian year begins.
    pub march: u32,
}

impl YearInfo {
    pub fn nowruz(&self) -> NaiveDate {
        // gy spans 560..=3798 and march 19..=22 for every supported year
        NaiveDate::from_ymd_opt(self.gy, 3, self.march)
            .expect("Nowruz of a supported year is a valid Gregorian date")
    }
}

// Thread-local cache: persian year -> parameters
thread_local! {
    static YEAR_CACHE: RefCell<Option<(i32, YearInfo)>> = const { RefCell::new(None) };
}

pub(crate) fn year_info(jy: i32) -> Result<YearInfo, TaqvimError> {
    let cached = YEAR_CACHE.with(|cache| {
        cache
            .borrow()
            .as_ref()
            .and_then(|(year, info)| (*year == jy).then_some(*info))
    });
    if let Some(info) = cached {
        return Ok(info);
    }

    let info = compute_year_info(jy)?;
    YEAR_CACHE.with(|cache| {
        *cache.borrow_mut() = Some((jy, info));
    });
    Ok(info)
}

fn compute_year_info(jy: i32) -> Result<YearInfo, TaqvimError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&jy) {
        return Err(TaqvimError::year_out_of_range(jy));
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Ok(YearInfo { leap, gy, march: march as u32 })
}

/// Returns true if the Persian year has 366 days. Unsupported years are never leap.
pub fn is_leap_year(year: i32) -> bool {
    year_info(year).map(|info| info.leap == 0).unwrap_or(false)
}

/// Number of days in a Persian month, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from Nowruz to the given month/day (0 for Farvardin 1st).
pub(crate) fn day_of_year_offset(month: u8, day: u8) -> i64 {
    let m = month as i64;
    (m - 1) * 31 - (m / 7) * (m - 7) + day as i64 - 1
}

/// Converts validated Persian components to Gregorian.
pub(crate) fn to_gregorian(year: i32, month: u8, day: u8) -> Result<NaiveDate, TaqvimError> {
    let info = year_info(year)?;
    Ok(info.nowruz() + Duration::days(day_of_year_offset(month, day)))
}

/// Month and day for a 0-based day offset from Nowruz.
fn month_day_from_offset(k: i64) -> (u8, u8) {
    if k < FIRST_HALF_DAYS {
        ((1 + k / 31) as u8, (k % 31 + 1) as u8)
    } else {
        let k = k - FIRST_HALF_DAYS;
        ((7 + k / 30) as u8, (k % 30 + 1) as u8)
    }
}

/// Converts a Gregorian date to Persian (year, month, day).
pub(crate) fn from_gregorian(date: NaiveDate) -> Result<(i32, u8, u8), TaqvimError> {
    let out_of_range = |_| TaqvimError::GregorianOutOfRange { date };

    // The last supported year ends in the Gregorian year after its own.
    let jy = (date.year() - 621).min(MAX_YEAR);
    let info = year_info(jy).map_err(out_of_range)?;
    let k = (date - info.nowruz()).num_days();

    if k >= 0 {
        if k >= days_in_year(jy) as i64 {
            return Err(TaqvimError::GregorianOutOfRange { date });
        }
        let (month, day) = month_day_from_offset(k);
        return Ok((jy, month, day));
    }

    let previous = jy - 1;
    if previous < MIN_YEAR {
        return Err(TaqvimError::GregorianOutOfRange { date });
    }
    let k = k + days_in_year(previous) as i64;
    if k < 0 {
        return Err(TaqvimError::GregorianOutOfRange { date });
    }
    let (month, day) = month_day_from_offset(k);
    Ok((previous, month, day))
}
