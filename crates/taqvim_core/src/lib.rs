//! Core of the taqvim picker engine: configuration, the session state
//! machine and re-exports of the calendar and rules crates.

pub mod config;
pub mod extension;
pub mod session;

pub use taqvim_calendar as calendar;
pub use taqvim_rules as rules;
pub use taqvim_types as types;

pub use config::{available_years, page_of_year, year_page, ConfigOverrides, PickerConfig, PickerConfigBuilder, Preset};
pub use extension::PersianDateExt;
pub use session::{transition, DatePicker, Event, Key, NoopListener, Notification, PickerContext, PickerListener, SessionState, Transition};
pub use taqvim_calendar::{
    format_date, format_date_localized, is_valid_date_string, parse_input, render_digits, to_ascii_digits,
    to_gregorian, to_persian, to_persian_digits, PersianDate, TaqvimError, DEFAULT_FORMAT,
};
pub use taqvim_rules::{
    generate_grid, has_full_page, CalendarCell, FixedToday, GridOptions, HolidayCalendar, HolidayProvider, MonthGrid, NoHolidays,
    RangePolicy, SystemClock, TodayProvider,
};
pub use taqvim_types::{DateUnit, HolidayCategory, HolidayEntry, Locale, MonthDay, PersianWeekday, QuickAction};

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{parse_input, to_gregorian, to_persian, generate_grid};
    pub use crate::{DatePicker, Event, PersianDate, PersianDateExt, PickerConfig, TaqvimError};
}
