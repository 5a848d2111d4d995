//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use std::sync::LazyLock;
use taqvim_calendar::{format_date, PersianDate, TaqvimError};
use taqvim_rules::{is_weekend, HolidayCalendar, HolidayProvider, HolidayStatus};
use taqvim_types::PersianWeekday;

static IRANIAN: LazyLock<HolidayCalendar> = LazyLock::new(HolidayCalendar::iranian);

/// Persian calendar views of a Gregorian date.
pub trait PersianDateExt {
    /// Converts to the Persian calendar.
    fn to_persian(&self) -> Result<PersianDate, TaqvimError>;

    /// Formats with a pattern such as `jYYYY/jMM/jDD`.
    fn format_persian(&self, pattern: &str) -> Result<String, TaqvimError>;

    /// Saturday-first weekday.
    fn persian_weekday(&self) -> PersianWeekday;

    /// Holiday status under the built-in Iranian table.
    fn persian_holiday(&self) -> Result<HolidayStatus, TaqvimError>;

    /// True on Fridays.
    fn is_persian_weekend(&self) -> bool;

    /// True if the date is a weekend or an Iranian holiday.
    fn is_day_off(&self) -> bool;
}

impl PersianDateExt for NaiveDate {
    fn to_persian(&self) -> Result<PersianDate, TaqvimError> {
        PersianDate::from_gregorian(*self)
    }

    fn format_persian(&self, pattern: &str) -> Result<String, TaqvimError> {
        self.to_persian().map(|date| format_date(&date, pattern))
    }

    fn persian_weekday(&self) -> PersianWeekday {
        use chrono::Datelike;
        PersianWeekday::from_sunday_based(self.weekday().num_days_from_sunday())
    }

    fn persian_holiday(&self) -> Result<HolidayStatus, TaqvimError> {
        let date = self.to_persian()?;
        Ok(IRANIAN.classify(&date))
    }

    fn is_persian_weekend(&self) -> bool {
        self.persian_weekday().is_friday()
    }

    fn is_day_off(&self) -> bool {
        match self.to_persian() {
            Ok(date) => is_weekend(&date) || IRANIAN.holiday(&date).is_some(),
            Err(_) => self.is_persian_weekend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_trait() {
        let nowruz = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(nowruz.to_persian().unwrap(), PersianDate::new(1403, 1, 1).unwrap());
        assert_eq!(nowruz.format_persian("jYYYY/jMM/jDD").unwrap(), "1403/01/01");
        assert_eq!(nowruz.persian_weekday(), PersianWeekday::Chaharshanbeh);
        assert!(nowruz.persian_holiday().unwrap().is_holiday);
        assert!(nowruz.is_day_off());
    }

    #[test]
    fn test_holidays_follow_iranian_table() {
        let table = HolidayCalendar::iranian();
        let mut day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        for _ in 0..366 {
            let persian = day.to_persian().unwrap();
            assert_eq!(day.persian_holiday().unwrap(), table.classify(&persian));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_weekend() {
        let friday = NaiveDate::from_ymd_opt(2024, 4, 19).unwrap();
        assert!(friday.is_persian_weekend());
        assert!(friday.is_day_off());
        let tuesday = NaiveDate::from_ymd_opt(2024, 4, 23).unwrap();
        assert!(!tuesday.is_day_off());
    }

    #[test]
    fn test_out_of_range() {
        let far = NaiveDate::from_ymd_opt(3900, 1, 1).unwrap();
        assert!(far.to_persian().is_err());
        assert!(far.format_persian("jYYYY").is_err());
    }
}
