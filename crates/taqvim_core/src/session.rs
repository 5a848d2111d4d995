//! Picker session as a finite-state machine.
//!
//! [`transition`] is pure: it maps a state and an event to the next state and
//! the notifications the host should deliver. [`DatePicker`] keeps the state
//! and dispatches those notifications to a [`PickerListener`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use taqvim_calendar::{format_date_localized, parse_input, PersianDate, TaqvimError};
use taqvim_rules::{
    generate_grid, has_full_page, GridOptions, HolidayCalendar, HolidayProvider, MonthGrid, RangePolicy,
    SystemClock, TodayProvider,
};
use taqvim_types::QuickAction;

use crate::config::PickerConfig;

/// Everything the picker UI renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub is_open: bool,
    /// Raw text of the input box.
    pub input_value: String,
    pub display_month: u8,
    pub display_year: i32,
    pub selected_date: Option<PersianDate>,
    pub hovered_date: Option<PersianDate>,
    /// Shortcut currently highlighted.
    pub quick_action: Option<QuickAction>,
}

impl SessionState {
    /// Closed session showing `today`'s month.
    pub fn new(today: PersianDate) -> Self {
        Self {
            is_open: false,
            input_value: String::new(),
            display_month: today.month(),
            display_year: today.year(),
            selected_date: None,
            hovered_date: None,
            quick_action: None,
        }
    }

    /// Closed session for an initial value, as [`Event::SetValue`] would set it.
    pub fn with_value(today: PersianDate, value: Option<&str>) -> Self {
        let mut state = Self::new(today);
        sync_value(&mut state, value);
        state
    }

    fn show(&mut self, date: &PersianDate) {
        self.display_year = date.year();
        self.display_month = date.month();
    }

    fn close(&mut self) {
        self.is_open = false;
        self.hovered_date = None;
        self.quick_action = None;
    }
}

/// Keyboard keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Enter,
    ArrowLeft,
    ArrowRight,
    #[serde(other)]
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Inputs to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// Click on the input. Opens, or closes an open picker.
    Activate,
    SelectDate(PersianDate),
    NextMonth,
    PrevMonth,
    NextYear,
    PrevYear,
    PickMonthYear { year: i32, month: u8 },
    /// The input text changed.
    Input(String),
    Today,
    Clear,
    /// The host's highlight timer for a quick action ran out.
    QuickActionSettled,
    OutsideClick,
    Key(Key),
    Hover(Option<PersianDate>),
    /// The bound value changed outside the picker.
    SetValue(Option<String>),
}

/// Callbacks owed to the host after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Notification {
    /// `gregorian` is `None` when the value was cleared.
    Change { formatted: String, gregorian: Option<NaiveDate> },
    MonthChange { year: i32, month: u8 },
    YearChange { year: i32 },
}

/// Read-only inputs for a transition.
#[derive(Debug, Clone)]
pub struct PickerContext<'a> {
    pub config: &'a PickerConfig,
    pub today: PersianDate,
    policy: RangePolicy,
}

impl<'a> PickerContext<'a> {
    pub fn new(config: &'a PickerConfig, today: PersianDate) -> Self {
        Self { config, today, policy: config.range_policy() }
    }

    pub fn is_disabled(&self, date: &PersianDate) -> bool {
        self.policy.is_disabled(date, &self.today)
    }

    fn format(&self, date: &PersianDate) -> String {
        format_date_localized(date, &self.config.format, self.config.locale)
    }

    fn change(&self, date: &PersianDate) -> Notification {
        Notification::Change { formatted: self.format(date), gregorian: Some(date.to_gregorian()) }
    }
}

/// Next state plus the notifications it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub notifications: Vec<Notification>,
}

/// Applies one event.
pub fn transition(state: &SessionState, event: &Event, ctx: &PickerContext<'_>) -> Transition {
    let mut next = state.clone();
    let mut notifications = Vec::new();

    match event {
        Event::Activate => {
            if ctx.config.disabled {
                tracing::debug!("activation ignored, picker disabled");
            } else if next.is_open {
                next.close();
            } else {
                let anchor = next.selected_date.unwrap_or(ctx.today);
                next.show(&anchor);
                next.is_open = true;
            }
        }

        Event::SelectDate(date) => {
            if next.is_open {
                commit(&mut next, date, ctx, &mut notifications);
            }
        }

        Event::NextMonth => shift_display(&mut next, 1, &mut notifications),
        Event::PrevMonth => shift_display(&mut next, -1, &mut notifications),
        Event::NextYear => shift_display(&mut next, 12, &mut notifications),
        Event::PrevYear => shift_display(&mut next, -12, &mut notifications),

        Event::PickMonthYear { year, month } => match PersianDate::first_of_month(*year, *month) {
            Ok(_) if !has_full_page(*year, *month) => {
                tracing::debug!(year, month, "month/year pick outside renderable pages");
            }
            Ok(first) => {
                next.show(&first);
                notifications.push(Notification::MonthChange { year: *year, month: *month });
                notifications.push(Notification::YearChange { year: *year });
            }
            Err(e) => tracing::debug!(error = %e, "month/year pick rejected"),
        },

        Event::Input(_) if ctx.config.disabled => {
            tracing::debug!("input ignored, picker disabled");
        }

        Event::Input(text) => {
            next.input_value = text.clone();
            match parse_input(text) {
                Some(date) if ctx.is_disabled(&date) => {
                    tracing::debug!(%date, "typed date is disabled");
                }
                Some(date) => {
                    next.selected_date = Some(date);
                    next.show(&date);
                    notifications.push(ctx.change(&date));
                }
                None => {}
            }
        }

        Event::Today => {
            if ctx.config.disabled {
                tracing::debug!("today shortcut ignored, picker disabled");
            } else if !ctx.config.quick_actions {
                tracing::debug!("today shortcut ignored, quick actions off");
            } else if commit(&mut next, &ctx.today, ctx, &mut notifications) {
                next.quick_action = Some(QuickAction::Today);
            }
        }

        Event::Clear => {
            if ctx.config.allow_clear && !ctx.config.disabled {
                next.selected_date = None;
                next.input_value.clear();
                next.close();
                notifications.push(Notification::Change { formatted: String::new(), gregorian: None });
            }
        }

        Event::QuickActionSettled => next.quick_action = None,

        Event::OutsideClick => next.close(),

        Event::Key(key) => {
            if next.is_open {
                match key {
                    Key::Escape => next.close(),
                    Key::Enter => {
                        if let Some(hovered) = next.hovered_date {
                            commit(&mut next, &hovered, ctx, &mut notifications);
                        }
                    }
                    Key::ArrowLeft => shift_display(&mut next, 1, &mut notifications),
                    Key::ArrowRight => shift_display(&mut next, -1, &mut notifications),
                    Key::Other => {}
                }
            }
        }

        Event::Hover(date) => next.hovered_date = *date,

        Event::SetValue(value) => sync_value(&mut next, value.as_deref()),
    }

    if next != *state {
        tracing::debug!(?event, open = next.is_open, selected = ?next.selected_date, "session transition");
    }

    Transition { state: next, notifications }
}

/// Selects `date` and closes. Returns false when the date is disabled.
fn commit(
    state: &mut SessionState,
    date: &PersianDate,
    ctx: &PickerContext<'_>,
    notifications: &mut Vec<Notification>,
) -> bool {
    if ctx.is_disabled(date) {
        tracing::debug!(%date, "selection of disabled date rejected");
        return false;
    }

    state.selected_date = Some(*date);
    state.input_value = ctx.format(date);
    state.show(date);
    state.close();
    notifications.push(ctx.change(date));
    true
}

fn shift_display(state: &mut SessionState, months: i64, notifications: &mut Vec<Notification>) {
    let shifted = PersianDate::first_of_month(state.display_year, state.display_month)
        .and_then(|first| first.add_months(months));

    match shifted {
        Ok(target) if !has_full_page(target.year(), target.month()) => {
            tracing::debug!(months, "display shift past the last renderable page");
        }
        Ok(target) => {
            let year_changed = target.year() != state.display_year;
            state.show(&target);
            notifications.push(Notification::MonthChange { year: target.year(), month: target.month() });
            if year_changed {
                notifications.push(Notification::YearChange { year: target.year() });
            }
        }
        Err(e) => tracing::debug!(error = %e, months, "display shift out of range"),
    }
}

/// Mirrors an external value into the state without notifying.
fn sync_value(state: &mut SessionState, value: Option<&str>) {
    let text = value.unwrap_or_default();
    match value.and_then(|v| v.parse::<PersianDate>().ok().filter(|d| d.to_string() == v)) {
        Some(date) => {
            state.selected_date = Some(date);
            state.show(&date);
        }
        None => state.selected_date = None,
    }
    state.input_value = text.to_owned();
}

/// Receives picker callbacks. Every method defaults to a no-op.
pub trait PickerListener {
    fn on_change(&mut self, _formatted: &str, _gregorian: Option<NaiveDate>) {}
    fn on_month_change(&mut self, _year: i32, _month: u8) {}
    fn on_year_change(&mut self, _year: i32) {}
}

/// Listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl PickerListener for NoopListener {}

/// A picker session with its configuration and providers.
pub struct DatePicker {
    config: PickerConfig,
    state: SessionState,
    holidays: Box<dyn HolidayProvider>,
    clock: Box<dyn TodayProvider>,
    listener: Box<dyn PickerListener>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("holidays", &self.holidays)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl DatePicker {
    /// Picker with the Iranian holiday table and the system clock.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `config` fails validation, or a clock error.
    pub fn new(config: PickerConfig) -> Result<Self, TaqvimError> {
        Self::with_providers(config, Box::new(HolidayCalendar::iranian()), Box::new(SystemClock))
    }

    pub fn with_providers(
        config: PickerConfig,
        holidays: Box<dyn HolidayProvider>,
        clock: Box<dyn TodayProvider>,
    ) -> Result<Self, TaqvimError> {
        config.validate()?;
        let today = clock.today()?;
        Ok(Self {
            config,
            state: SessionState::new(today),
            holidays,
            clock,
            listener: Box::new(NoopListener),
        })
    }

    pub fn with_listener(mut self, listener: Box<dyn PickerListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Sets the initial value without notifying the listener.
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        sync_value(&mut self.state, value);
        self
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True while the host should listen for outside clicks and key presses.
    pub fn wants_global_listeners(&self) -> bool {
        self.state.is_open
    }

    /// Applies an event, notifies the listener and returns the notifications.
    ///
    /// A clock failure leaves the state unchanged.
    pub fn apply(&mut self, event: Event) -> Vec<Notification> {
        let today = match self.clock.today() {
            Ok(today) => today,
            Err(e) => {
                tracing::warn!(error = %e, "clock unavailable, event dropped");
                return Vec::new();
            }
        };

        let ctx = PickerContext::new(&self.config, today);
        let Transition { state, notifications } = transition(&self.state, &event, &ctx);
        self.state = state;

        for notification in &notifications {
            match notification {
                Notification::Change { formatted, gregorian } => self.listener.on_change(formatted, *gregorian),
                Notification::MonthChange { year, month } => self.listener.on_month_change(*year, *month),
                Notification::YearChange { year } => self.listener.on_year_change(*year),
            }
        }
        notifications
    }

    /// Generates the page for the displayed month.
    pub fn grid(&self) -> Result<MonthGrid, TaqvimError> {
        let today = self.clock.today()?;
        let options = GridOptions::new()
            .selected(self.state.selected_date)
            .policy(self.config.range_policy())
            .show_holidays(self.config.show_holidays)
            .locale(self.config.locale);

        generate_grid(self.state.display_year, self.state.display_month, today, &options, self.holidays.as_ref())
            .inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    year = self.state.display_year,
                    month = self.state.display_month,
                    "month grid unavailable"
                );
            })
    }
}
