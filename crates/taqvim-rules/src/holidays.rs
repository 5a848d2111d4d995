//! Holiday table and weekend classification.
//!
//! Entries are keyed by Persian month and day only, so every entry matches in
//! every year. The lunar holidays in [`IRANIAN_HOLIDAYS`] are pinned to one
//! solar month/day and drift from their true dates year to year; a year-aware
//! source can replace the table through [`HolidayProvider`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use taqvim_calendar::PersianDate;
use taqvim_types::{HolidayCategory, HolidayEntry, MonthDay};

use HolidayCategory::{National, Religious};

/// Official Iranian holidays.
pub const IRANIAN_HOLIDAYS: [HolidayEntry; 22] = [
    // Fixed solar dates
    HolidayEntry::official(1, 1, "جشن نوروز", National),
    HolidayEntry::official(1, 2, "عید نوروز", National),
    HolidayEntry::official(1, 3, "عید نوروز", National),
    HolidayEntry::official(1, 4, "عید نوروز", National),
    HolidayEntry::official(1, 12, "روز جمهوری اسلامی", National),
    HolidayEntry::official(1, 13, "سیزده بدر", National),
    HolidayEntry::official(3, 14, "رحلت امام خمینی", Religious),
    HolidayEntry::official(3, 15, "قیام ۱۵ خرداد", National),
    HolidayEntry::official(11, 22, "انقلاب اسلامی", National),
    HolidayEntry::official(12, 29, "ملی شدن نفت", National),
    // Lunar, approximated to a single solar date
    HolidayEntry::official(1, 26, "شهادت حضرت فاطمه", Religious),
    HolidayEntry::official(2, 30, "شهادت امام علی", Religious),
    HolidayEntry::official(6, 3, "شهادت امام صادق", Religious),
    HolidayEntry::official(7, 27, "عید فطر", Religious),
    HolidayEntry::official(7, 28, "تعطیل عید فطر", Religious),
    HolidayEntry::official(10, 2, "عید قربان", Religious),
    HolidayEntry::official(10, 10, "عید غدیر", Religious),
    HolidayEntry::official(10, 28, "تاسوعا", Religious),
    HolidayEntry::official(10, 29, "عاشورا", Religious),
    HolidayEntry::official(11, 28, "اربعین", Religious),
    HolidayEntry::official(12, 17, "شهادت پیامبر و امام حسن", Religious),
    HolidayEntry::official(12, 19, "شهادت امام رضا", Religious),
];

/// Source of holiday information for a date.
pub trait HolidayProvider: std::fmt::Debug + Send + Sync {
    fn holiday(&self, date: &PersianDate) -> Option<&HolidayEntry>;

    fn classify(&self, date: &PersianDate) -> HolidayStatus {
        match self.holiday(date) {
            Some(entry) => HolidayStatus { is_holiday: true, name: Some(entry.name.to_string()) },
            None => HolidayStatus::default(),
        }
    }
}

/// Result of a holiday lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayStatus {
    pub is_holiday: bool,
    pub name: Option<String>,
}

/// Read-only holiday table indexed by month/day.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    entries: Vec<HolidayEntry>,
    index: HashMap<MonthDay, usize>,
}

impl HolidayCalendar {
    /// Builds a table. When two entries share a month/day the first one wins
    /// and later ones are dropped.
    pub fn new(entries: impl IntoIterator<Item = HolidayEntry>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();
        for entry in entries {
            if let std::collections::hash_map::Entry::Vacant(slot) = index.entry(entry.month_day) {
                slot.insert(kept.len());
                kept.push(entry);
            }
        }
        Self { entries: kept, index }
    }

    /// The built-in Iranian table.
    pub fn iranian() -> Self {
        Self::new(IRANIAN_HOLIDAYS)
    }

    pub fn lookup(&self, month_day: MonthDay) -> Option<&HolidayEntry> {
        self.index.get(&month_day).map(|&i| &self.entries[i])
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[HolidayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::iranian()
    }
}

impl HolidayProvider for HolidayCalendar {
    fn holiday(&self, date: &PersianDate) -> Option<&HolidayEntry> {
        self.lookup(date.month_day())
    }
}

/// Provider without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn holiday(&self, _date: &PersianDate) -> Option<&HolidayEntry> {
        None
    }
}

/// Friday is the Persian weekend day.
pub fn is_weekend(date: &PersianDate) -> bool {
    date.weekday().is_friday()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pd(y: i32, m: u8, d: u8) -> PersianDate {
        PersianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_nowruz_is_holiday_every_year() {
        let calendar = HolidayCalendar::iranian();
        for year in [1390, 1403, 1410] {
            let status = calendar.classify(&pd(year, 1, 1));
            assert!(status.is_holiday);
            assert_eq!(status.name.as_deref(), Some("جشن نوروز"));
        }
    }

    #[test]
    fn test_ordinary_day() {
        let calendar = HolidayCalendar::iranian();
        assert_eq!(calendar.classify(&pd(1403, 2, 5)), HolidayStatus::default());
    }

    #[test]
    fn test_lookup_key_matches_table() {
        let calendar = HolidayCalendar::iranian();
        let entry = calendar.lookup(MonthDay::new(11, 22)).unwrap();
        assert_eq!(entry.key(), "11/22");
        assert_eq!(entry.category, HolidayCategory::National);
        assert!(entry.is_official);
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let calendar = HolidayCalendar::new([
            HolidayEntry::official(5, 5, "first", National),
            HolidayEntry::official(5, 5, "second", National),
        ]);
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.entries().len(), calendar.len());
        assert_eq!(calendar.lookup(MonthDay::new(5, 5)).unwrap().name, "first");
    }

    #[test]
    fn test_iranian_table_has_unique_keys() {
        let calendar = HolidayCalendar::iranian();
        assert_eq!(calendar.len(), IRANIAN_HOLIDAYS.len());
        assert_eq!(calendar.entries(), &IRANIAN_HOLIDAYS[..]);
    }

    #[test]
    fn test_no_holidays() {
        assert!(!NoHolidays.classify(&pd(1403, 1, 1)).is_holiday);
    }

    #[test]
    fn test_friday_is_weekend() {
        // 1403/01/31 is Friday 2024-04-19
        assert!(is_weekend(&pd(1403, 1, 31)));
        assert!(!is_weekend(&pd(1403, 1, 30)));
    }
}
