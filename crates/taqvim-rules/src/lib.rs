//! Holiday classification, availability rules and month grids for taqvim.

pub mod clock;
pub mod grid;
pub mod holidays;
pub mod range;

pub use clock::{FixedToday, SystemClock, TodayProvider};
pub use grid::{
    generate_grid, has_full_page, CalendarCell, GridOptions, MonthGrid, FIRST_PAGE, GRID_CELLS, GRID_COLUMNS,
    LAST_PAGE,
};
pub use holidays::{is_weekend, HolidayCalendar, HolidayProvider, HolidayStatus, NoHolidays, IRANIAN_HOLIDAYS};
pub use range::{in_range, Availability, DisableReason, RangePolicy};
