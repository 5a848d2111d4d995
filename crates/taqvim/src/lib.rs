//! # Taqvim
//!
//! Persian (Jalaali) calendar engine for date picker widgets: conversion,
//! holiday classification, lenient input parsing, 42-cell month grids and a
//! picker session state machine.
//!
//! This crate is a facade that re-exports functionality from the `taqvim` ecosystem.
//!
//! ## Modules
//!
//! - `types`: shared enums and reference data (Locale, PersianWeekday, HolidayEntry)
//! - `calendar`: `PersianDate`, conversion, arithmetic, formatting and parsing
//! - `rules`: holidays, availability and grid generation
//! - `config` / `session`: picker configuration and event handling
//!
//! ## Usage
//!
//! ```rust
//! use taqvim::prelude::*;
//! use chrono::NaiveDate;
//!
//! let nowruz = parse_input("۱۴۰۳/۰۱/۰۱").unwrap();
//! assert_eq!(to_gregorian(&nowruz), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
//!
//! let mut picker = DatePicker::new(PickerConfig::default()).unwrap();
//! picker.apply(Event::Activate);
//! assert_eq!(picker.grid().unwrap().cells.len(), 42);
//! ```

pub use taqvim_core::*;
