use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use taqvim_types::{DateUnit, MonthDay, PersianWeekday};

use crate::error::TaqvimError;
use crate::jalali::{self, MAX_YEAR, MIN_YEAR};

/// A validated date in the Persian (Jalaali) calendar.
///
/// Ordering is chronological. The value is always convertible to a Gregorian
/// [`NaiveDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Ymd", into = "Ymd")]
pub struct PersianDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Unvalidated wire form of [`PersianDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ymd {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl TryFrom<Ymd> for PersianDate {
    type Error = TaqvimError;

    fn try_from(value: Ymd) -> Result<Self, Self::Error> {
        PersianDate::new(value.year, value.month, value.day)
    }
}

impl From<PersianDate> for Ymd {
    fn from(value: PersianDate) -> Self {
        Ymd { year: value.year, month: value.month, day: value.day }
    }
}

impl PersianDate {
    /// Creates a date, rejecting days that do not exist in that month.
    ///
    /// # Errors
    /// `YearOutOfRange` outside -61..=3177, `InvalidDate` for a bad month or day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, TaqvimError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TaqvimError::year_out_of_range(year));
        }
        if !(1..=12).contains(&month) || day == 0 || day > jalali::days_in_month(year, month) {
            return Err(TaqvimError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// First day of a Persian month.
    pub fn first_of_month(year: i32, month: u8) -> Result<Self, TaqvimError> {
        Self::new(year, month, 1)
    }

    /// Last day of a Persian month (leap aware).
    pub fn last_of_month(year: i32, month: u8) -> Result<Self, TaqvimError> {
        Self::new(year, month, jalali::days_in_month(year, month))
    }

    /// Converts a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, TaqvimError> {
        let (year, month, day) = jalali::from_gregorian(date)?;
        Ok(Self { year, month, day })
    }

    /// Today's date in the local timezone.
    pub fn today() -> Result<Self, TaqvimError> {
        Self::from_gregorian(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        jalali::is_leap_year(self.year)
    }

    pub fn days_in_month(&self) -> u8 {
        jalali::days_in_month(self.year, self.month)
    }

    /// Converts to the Gregorian calendar.
    pub fn to_gregorian(&self) -> NaiveDate {
        // construction guarantees a supported year
        jalali::to_gregorian(self.year, self.month, self.day)
            .expect("PersianDate holds a supported year")
    }

    /// Day of the week, Saturday first.
    pub fn weekday(&self) -> PersianWeekday {
        PersianWeekday::from_sunday_based(self.to_gregorian().weekday().num_days_from_sunday())
    }

    /// Chronological comparison as -1, 0 or 1.
    pub fn compare(&self, other: &Self) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// The next day, or `None` past the supported range.
    pub fn succ_opt(&self) -> Option<Self> {
        if self.day < self.days_in_month() {
            Some(Self { day: self.day + 1, ..*self })
        } else if self.month < 12 {
            Some(Self { month: self.month + 1, day: 1, ..*self })
        } else {
            Self::new(self.year + 1, 1, 1).ok()
        }
    }

    /// The previous day, or `None` before the supported range.
    pub fn pred_opt(&self) -> Option<Self> {
        if self.day > 1 {
            Some(Self { day: self.day - 1, ..*self })
        } else if self.month > 1 {
            Self::last_of_month(self.year, self.month - 1).ok()
        } else {
            Self::last_of_month(self.year - 1, 12).ok()
        }
    }

    /// Adds a signed amount of days, months or years.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the destination month (1403/06/31 + 1 month = 1403/07/30).
    pub fn add(&self, amount: i64, unit: DateUnit) -> Result<Self, TaqvimError> {
        match unit {
            DateUnit::Days => self.add_days(amount),
            DateUnit::Months => self.add_months(amount),
            DateUnit::Years => self.add_months(amount.saturating_mul(12)),
        }
    }

    /// Subtracts a signed amount of days, months or years.
    pub fn sub(&self, amount: i64, unit: DateUnit) -> Result<Self, TaqvimError> {
        self.add(amount.saturating_neg(), unit)
    }

    pub fn add_days(&self, days: i64) -> Result<Self, TaqvimError> {
        let gregorian = self.to_gregorian();
        let shifted = Duration::try_days(days)
            .and_then(|delta| gregorian.checked_add_signed(delta))
            .ok_or_else(|| TaqvimError::year_out_of_range(self.year))?;
        Self::from_gregorian(shifted)
    }

    pub fn add_months(&self, months: i64) -> Result<Self, TaqvimError> {
        let total = (self.year as i64 * 12 + (self.month as i64 - 1)).saturating_add(months);
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;

        let year = i32::try_from(year)
            .map_err(|_| TaqvimError::year_out_of_range(if year < 0 { i32::MIN } else { i32::MAX }))?;

        let day = self.day.min(jalali::days_in_month(year, month));
        Self::new(year, month, day)
    }

    /// Difference `self - other` in the given unit, truncated toward zero.
    ///
    /// Months count only completed months under the same clamping rule as
    /// [`add`](Self::add); years are completed months divided by 12.
    pub fn diff(&self, other: &Self, unit: DateUnit) -> i64 {
        match unit {
            DateUnit::Days => (self.to_gregorian() - other.to_gregorian()).num_days(),
            DateUnit::Months => self.diff_months(other),
            DateUnit::Years => self.diff_months(other) / 12,
        }
    }

    fn diff_months(&self, other: &Self) -> i64 {
        let raw = (self.year as i64 - other.year as i64) * 12
            + (self.month as i64 - other.month as i64);
        // Day `other` would land on after stepping `raw` months.
        let landed = other.day.min(self.days_in_month());

        if raw > 0 && landed > self.day {
            raw - 1
        } else if raw < 0 && landed < self.day {
            raw + 1
        } else {
            raw
        }
    }

    /// Iterates days from `self` to `end`, both inclusive.
    pub fn iter_days(&self, end: PersianDate) -> DayIter {
        DayIter { current: Some(*self), end }
    }
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<NaiveDate> for PersianDate {
    type Error = TaqvimError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(value)
    }
}

impl From<PersianDate> for NaiveDate {
    fn from(value: PersianDate) -> Self {
        value.to_gregorian()
    }
}

/// Iterator over consecutive Persian days.
#[derive(Debug, Clone)]
pub struct DayIter {
    current: Option<PersianDate>,
    end: PersianDate,
}

impl Iterator for DayIter {
    type Item = PersianDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.filter(|d| *d <= self.end)?;
        self.current = current.succ_opt();
        Some(current)
    }
}
