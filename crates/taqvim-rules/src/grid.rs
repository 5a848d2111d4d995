//! Fixed six-week month pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use taqvim_calendar::{PersianDate, TaqvimError, MAX_YEAR, MIN_YEAR};
use taqvim_types::Locale;

use crate::holidays::{is_weekend, HolidayProvider};
use crate::range::RangePolicy;

/// Cells in every generated page (6 rows of 7).
pub const GRID_CELLS: usize = 42;
/// Columns per row, Saturday through Friday.
pub const GRID_COLUMNS: usize = 7;

/// Earliest month whose whole page, spillover included, is representable.
pub const FIRST_PAGE: (i32, u8) = (MIN_YEAR, 2);
/// Latest month whose whole page is representable.
pub const LAST_PAGE: (i32, u8) = (MAX_YEAR, 11);

/// Whether [`generate_grid`] can build a full page for this month.
///
/// Farvardin of the first supported year and Esfand of the last one would
/// need spillover days outside the supported range.
pub fn has_full_page(year: i32, month: u8) -> bool {
    (1..=12).contains(&month) && (FIRST_PAGE..=LAST_PAGE).contains(&(year, month))
}

/// One day on a month page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub day: u8,
    pub month: u8,
    pub year: i32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
    pub is_disabled: bool,
    /// Spillover day from the previous or next month.
    pub is_other_month: bool,
    /// Canonical `YYYY/MM/DD` string.
    pub persian_date: String,
    pub gregorian_date: NaiveDate,
    pub date: PersianDate,
}

/// A generated month page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u8,
    pub month_name: String,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Rows of seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// Cells belonging to the displayed month.
    pub fn month_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.cells.iter().filter(|c| !c.is_other_month)
    }

    pub fn cell(&self, date: &PersianDate) -> Option<&CalendarCell> {
        self.cells.iter().find(|c| c.date == *date)
    }
}

/// Per-page inputs besides the month itself.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub selected: Option<PersianDate>,
    pub policy: RangePolicy,
    pub show_holidays: bool,
    pub locale: Locale,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            selected: None,
            policy: RangePolicy::default(),
            show_holidays: true,
            locale: Locale::default(),
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, date: Option<PersianDate>) -> Self { self.selected = date; self }
    pub fn policy(mut self, policy: RangePolicy) -> Self { self.policy = policy; self }
    pub fn show_holidays(mut self, show: bool) -> Self { self.show_holidays = show; self }
    pub fn locale(mut self, locale: Locale) -> Self { self.locale = locale; self }
}

struct CellContext<'a> {
    today: PersianDate,
    options: &'a GridOptions,
    holidays: &'a dyn HolidayProvider,
}

impl CellContext<'_> {
    fn cell(&self, date: PersianDate, is_other_month: bool) -> CalendarCell {
        let holiday = if self.options.show_holidays {
            self.holidays.classify(&date)
        } else {
            Default::default()
        };

        CalendarCell {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            is_today: date == self.today,
            is_selected: self.options.selected == Some(date),
            is_weekend: is_weekend(&date),
            is_holiday: holiday.is_holiday,
            holiday_name: holiday.name,
            is_disabled: self.options.policy.is_disabled(&date, &self.today),
            is_other_month,
            persian_date: date.to_string(),
            gregorian_date: date.to_gregorian(),
            date,
        }
    }
}

/// Builds the 42-cell page for a Persian month.
///
/// Leading cells come from the previous month so that the first day sits in
/// its Saturday-first weekday column; trailing cells from the next month fill
/// the page.
///
/// # Errors
/// `InvalidDate` for a month outside 1..=12, `YearOutOfRange` when the page
/// would reach outside the supported years (see [`has_full_page`]).
pub fn generate_grid(
    year: i32,
    month: u8,
    today: PersianDate,
    options: &GridOptions,
    holidays: &dyn HolidayProvider,
) -> Result<MonthGrid, TaqvimError> {
    let first = PersianDate::first_of_month(year, month)?;
    let last = PersianDate::last_of_month(year, month)?;
    let ctx = CellContext { today, options, holidays };

    let leading = first.weekday().index();
    tracing::trace!(year, month, leading, "generating month grid");
    let mut cells = Vec::with_capacity(GRID_CELLS);

    let mut before = Vec::with_capacity(leading);
    let mut cursor = first;
    for _ in 0..leading {
        cursor = cursor.pred_opt().ok_or_else(|| TaqvimError::year_out_of_range(year - 1))?;
        before.push(cursor);
    }
    cells.extend(before.into_iter().rev().map(|d| ctx.cell(d, true)));

    cells.extend(first.iter_days(last).map(|d| ctx.cell(d, false)));

    let mut cursor = last;
    while cells.len() < GRID_CELLS {
        cursor = cursor.succ_opt().ok_or_else(|| TaqvimError::year_out_of_range(year + 1))?;
        cells.push(ctx.cell(cursor, true));
    }

    Ok(MonthGrid {
        year,
        month,
        month_name: options.locale.month_name(month).to_owned(),
        cells,
    })
}
