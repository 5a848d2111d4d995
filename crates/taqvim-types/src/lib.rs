//! Core types shared by the taqvim crates.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Persian month names, Farvardin first.
pub const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین", "اردیبهشت", "خرداد", "تیر", "مرداد", "شهریور",
    "مهر", "آبان", "آذر", "دی", "بهمن", "اسفند",
];

/// Latin transliteration of [`PERSIAN_MONTHS`].
pub const ENGLISH_MONTHS: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar",
    "Mehr", "Aban", "Azar", "Dey", "Bahman", "Esfand",
];

/// Single-letter weekday headers, Saturday first.
pub const PERSIAN_DAYS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Full weekday names, Saturday first.
pub const PERSIAN_DAYS_FULL: [&str; 7] = [
    "شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنج‌شنبه", "جمعه",
];

pub const ENGLISH_DAYS_FULL: [&str; 7] = [
    "Saturday", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
];

/// Display locale. Only affects digits and names, never the calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Fa,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Self::Fa
    }
}

impl Locale {
    pub fn month_name(&self, month: u8) -> &'static str {
        let names = match self {
            Locale::Fa => &PERSIAN_MONTHS,
            Locale::En => &ENGLISH_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
            .unwrap_or("Unknown")
    }

    pub fn weekday_name(&self, weekday: PersianWeekday) -> &'static str {
        match self {
            Locale::Fa => PERSIAN_DAYS_FULL[weekday.index()],
            Locale::En => ENGLISH_DAYS_FULL[weekday.index()],
        }
    }
}

/// Day of the week in the Persian ordering (Saturday = 0 … Friday = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersianWeekday {
    Shanbeh,
    Yekshanbeh,
    Doshanbeh,
    Seshanbeh,
    Chaharshanbeh,
    Panjshanbeh,
    Jomeh,
}

impl PersianWeekday {
    pub const ALL: [PersianWeekday; 7] = [
        PersianWeekday::Shanbeh,
        PersianWeekday::Yekshanbeh,
        PersianWeekday::Doshanbeh,
        PersianWeekday::Seshanbeh,
        PersianWeekday::Chaharshanbeh,
        PersianWeekday::Panjshanbeh,
        PersianWeekday::Jomeh,
    ];

    /// Column index in a Saturday-first week.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Builds the weekday from a Sunday-first number (Sunday = 0).
    ///
    /// Values are taken modulo 7.
    pub fn from_sunday_based(native: u32) -> Self {
        Self::ALL[((native + 1) % 7) as usize]
    }

    pub fn is_friday(&self) -> bool {
        matches!(self, PersianWeekday::Jomeh)
    }

    pub fn short_name(&self) -> &'static str {
        PERSIAN_DAYS[self.index()]
    }
}

impl fmt::Display for PersianWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PERSIAN_DAYS_FULL[self.index()])
    }
}

/// Unit for date arithmetic and differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Days,
    Months,
    Years,
}

/// Holiday classification, as listed in the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCategory {
    National,
    Religious,
    International,
}

/// Year-independent key of a Persian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u8,
    pub day: u8,
}

impl MonthDay {
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.day)
    }
}

/// One row of a holiday table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    pub month_day: MonthDay,
    pub name: Cow<'static, str>,
    pub category: HolidayCategory,
    pub is_official: bool,
}

impl HolidayEntry {
    pub const fn official(month: u8, day: u8, name: &'static str, category: HolidayCategory) -> Self {
        Self {
            month_day: MonthDay::new(month, day),
            name: Cow::Borrowed(name),
            category,
            is_official: true,
        }
    }

    /// The "MM/DD" lookup key.
    pub fn key(&self) -> String {
        self.month_day.to_string()
    }
}

/// One-click shortcuts offered next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Today,
    Clear,
}
