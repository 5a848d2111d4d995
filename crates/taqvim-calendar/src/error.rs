use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::jalali::{MAX_YEAR, MIN_YEAR};

/// Errors from taqvim operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaqvimError {
    /// Month or day outside the calendar for that year.
    #[error("Invalid Persian date {year}/{month:02}/{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Persian year outside the supported range.
    #[error("Persian year {year} is out of supported range ({min} to {max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Gregorian date whose Persian equivalent is outside the supported range.
    #[error("Gregorian date {date} has no supported Persian equivalent")]
    GregorianOutOfRange { date: NaiveDate },

    /// Text that matches none of the accepted date patterns.
    #[error("Unparsable date input: {input:?}")]
    UnparsableInput { input: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl TaqvimError {
    /// Creates a `YearOutOfRange` error with standard bounds.
    pub fn year_out_of_range(year: i32) -> Self {
        Self::YearOutOfRange { year, min: MIN_YEAR, max: MAX_YEAR }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}
