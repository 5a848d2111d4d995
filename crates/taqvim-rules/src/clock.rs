//! Sources for "today".

use taqvim_calendar::{PersianDate, TaqvimError};

/// Provides the current calendar date.
pub trait TodayProvider: std::fmt::Debug + Send + Sync {
    fn today(&self) -> Result<PersianDate, TaqvimError>;
}

/// Local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TodayProvider for SystemClock {
    fn today(&self) -> Result<PersianDate, TaqvimError> {
        PersianDate::today()
    }
}

/// Fixed date for every call.
#[derive(Debug, Clone, Copy)]
pub struct FixedToday(PersianDate);

impl FixedToday {
    pub fn new(date: PersianDate) -> Self {
        Self(date)
    }
}

impl TodayProvider for FixedToday {
    fn today(&self) -> Result<PersianDate, TaqvimError> {
        Ok(self.0)
    }
}
