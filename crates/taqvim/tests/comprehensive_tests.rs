use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use taqvim::{
    generate_grid, parse_input, rules::GRID_CELLS, to_gregorian, to_persian, DateUnit, DatePicker, Event,
    FixedToday, GridOptions, HolidayCalendar, Key, Notification, PersianDate, PickerConfig, PickerListener,
    Preset, RangePolicy,
};

fn pd(y: i32, m: u8, d: u8) -> PersianDate {
    PersianDate::new(y, m, d).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Change(String, Option<NaiveDate>),
    Month(i32, u8),
    Year(i32),
}

#[derive(Default)]
struct Log(Rc<RefCell<Vec<Call>>>);

impl PickerListener for Log {
    fn on_change(&mut self, formatted: &str, gregorian: Option<NaiveDate>) {
        self.0.borrow_mut().push(Call::Change(formatted.to_owned(), gregorian));
    }

    fn on_month_change(&mut self, year: i32, month: u8) {
        self.0.borrow_mut().push(Call::Month(year, month));
    }

    fn on_year_change(&mut self, year: i32) {
        self.0.borrow_mut().push(Call::Year(year));
    }
}

fn picker(config: PickerConfig, today: PersianDate) -> Result<(DatePicker, Rc<RefCell<Vec<Call>>>)> {
    let log = Log::default();
    let calls = log.0.clone();
    let picker = DatePicker::with_providers(config, Box::new(HolidayCalendar::iranian()), Box::new(FixedToday::new(today)))?
        .with_listener(Box::new(log));
    Ok((picker, calls))
}

#[test]
fn test_scenario_a_farvardin_1403() -> Result<()> {
    let grid = generate_grid(1403, 1, pd(1403, 1, 1), &GridOptions::new(), &HolidayCalendar::iranian())?;
    assert_eq!(grid.cells.len(), GRID_CELLS);

    let month_days: Vec<u8> = grid.month_cells().map(|c| c.day).collect();
    assert_eq!(month_days, (1..=31).collect::<Vec<_>>());

    assert_eq!(to_gregorian(&pd(1403, 1, 1)), NaiveDate::from_ymd_opt(2024, 3, 20).context("date")?);
    assert_eq!(grid.cells.iter().take_while(|c| c.is_other_month).count(), 4);
    assert_eq!(grid.cells.iter().rev().take_while(|c| c.is_other_month).count(), 7);
    Ok(())
}

#[test]
fn test_scenario_b_bounded_range() -> Result<()> {
    let config = PickerConfig::builder().min_date(pd(1403, 1, 10)).max_date(pd(1403, 1, 20)).build()?;
    let (mut picker, calls) = picker(config, pd(1403, 1, 1))?;
    picker.apply(Event::Activate);

    let grid = picker.grid()?;
    let enabled: Vec<u8> = grid.month_cells().filter(|c| !c.is_disabled).map(|c| c.day).collect();
    assert_eq!(enabled, (10..=20).collect::<Vec<_>>());
    assert!(grid.cells.iter().filter(|c| c.is_other_month).all(|c| c.is_disabled));

    picker.apply(Event::SelectDate(pd(1403, 1, 9)));
    assert!(picker.state().is_open);
    assert!(calls.borrow().is_empty());

    picker.apply(Event::SelectDate(pd(1403, 1, 20)));
    assert_eq!(picker.state().selected_date, Some(pd(1403, 1, 20)));
    Ok(())
}

#[test]
fn test_scenario_c_persian_digits() -> Result<()> {
    assert_eq!(parse_input("۱۴۰۳/۰۱/۰۱"), parse_input("1403/01/01"));
    assert_eq!(parse_input("۱۴۰۳/۰۱/۰۱"), Some(pd(1403, 1, 1)));

    let (mut picker, calls) = picker(PickerConfig::default(), pd(1403, 1, 1))?;
    picker.apply(Event::Input("۱۴۰۳/۰۱/۰۱".into()));
    assert_eq!(
        *calls.borrow(),
        vec![Call::Change("1403/01/01".into(), NaiveDate::from_ymd_opt(2024, 3, 20))]
    );
    Ok(())
}

#[test]
fn test_scenario_d_disabled_past_selection() -> Result<()> {
    let config = PickerConfig::builder().disable_past(true).build()?;
    let (mut picker, calls) = picker(config, pd(1403, 5, 10))?;
    picker.apply(Event::Activate);

    let before = picker.state().clone();
    let notifications = picker.apply(Event::SelectDate(pd(1403, 5, 9)));
    assert!(notifications.is_empty());
    assert_eq!(*picker.state(), before);
    assert!(picker.state().is_open);
    assert!(calls.borrow().is_empty());
    Ok(())
}

#[test]
fn test_scenario_e_escape_closes_silently() -> Result<()> {
    let (mut picker, calls) = picker(PickerConfig::default(), pd(1403, 5, 10))?;
    picker.apply(Event::Activate);
    assert!(picker.wants_global_listeners());

    picker.apply(Event::Key(Key::Escape));
    assert!(!picker.state().is_open);
    assert!(!picker.wants_global_listeners());
    assert_eq!(picker.state().selected_date, None);
    assert!(calls.borrow().is_empty());
    Ok(())
}

#[test]
fn test_navigation_notifications() -> Result<()> {
    let (mut picker, calls) = picker(PickerConfig::default(), pd(1403, 12, 5))?;
    picker.apply(Event::Activate);
    picker.apply(Event::NextMonth);
    picker.apply(Event::Key(Key::ArrowRight));
    picker.apply(Event::PickMonthYear { year: 1399, month: 7 });

    assert_eq!(
        *calls.borrow(),
        vec![
            Call::Month(1404, 1),
            Call::Year(1404),
            Call::Month(1403, 12),
            Call::Year(1403),
            Call::Month(1399, 7),
            Call::Year(1399),
        ]
    );

    let grid = picker.grid()?;
    assert_eq!((grid.year, grid.month, grid.month_name.as_str()), (1399, 7, "مهر"));
    Ok(())
}

#[test]
fn test_today_then_clear_flow() -> Result<()> {
    let (mut picker, calls) = picker(PickerConfig::default(), pd(1403, 3, 14))?;
    picker.apply(Event::Activate);
    picker.apply(Event::Today);
    assert_eq!(picker.state().input_value, "1403/03/14");
    assert!(picker.state().quick_action.is_some());

    picker.apply(Event::QuickActionSettled);
    assert!(picker.state().quick_action.is_none());

    picker.apply(Event::Clear);
    assert_eq!(picker.state().input_value, "");

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], Call::Change(String::new(), None));
    Ok(())
}

#[test]
fn test_external_value_and_holidays() -> Result<()> {
    let (mut picker, calls) = picker(PickerConfig::default(), pd(1403, 1, 1))?;
    picker.apply(Event::SetValue(Some("1402/11/22".into())));
    assert!(calls.borrow().is_empty());

    let grid = picker.grid()?;
    let revolution_day = grid.cell(&pd(1402, 11, 22)).context("cell on page")?;
    assert!(revolution_day.is_selected);
    assert!(revolution_day.is_holiday);
    assert_eq!(revolution_day.holiday_name.as_deref(), Some("انقلاب اسلامی"));
    Ok(())
}

#[test]
fn test_birth_date_preset_hides_holidays() -> Result<()> {
    let config = PickerConfig::from_preset(Preset::BirthDate);
    let (mut picker, _) = picker(config, pd(1403, 1, 2))?;
    picker.apply(Event::Activate);
    let grid = picker.grid()?;
    assert!(grid.cells.iter().all(|c| !c.is_holiday));
    assert!(grid.cell(&pd(1403, 1, 3)).context("cell")?.is_disabled);
    assert!(!grid.cell(&pd(1403, 1, 2)).context("cell")?.is_disabled);
    Ok(())
}

#[test]
fn test_config_from_json_drives_picker() -> Result<()> {
    let config = PickerConfig::from_json(r#"{"preset":"appointment","format":"jYYYY-jMM-jDD","allowClear":false}"#)?;
    let (mut picker, _) = picker(config, pd(1403, 7, 1))?;
    picker.apply(Event::Activate);
    picker.apply(Event::SelectDate(pd(1403, 7, 2)));
    assert_eq!(picker.state().input_value, "1403-07-02");

    picker.apply(Event::Clear);
    assert_eq!(picker.state().selected_date, Some(pd(1403, 7, 2)));
    Ok(())
}

#[test]
fn test_arithmetic_across_year_end() -> Result<()> {
    let last = pd(1403, 12, 30);
    assert_eq!(last.add(1, DateUnit::Days)?, pd(1404, 1, 1));
    assert_eq!(last.add(1, DateUnit::Years)?, pd(1404, 12, 29));
    assert_eq!(pd(1404, 1, 1).diff(&last, DateUnit::Days), 1);
    assert_eq!(to_persian(to_gregorian(&last))?, last);
    Ok(())
}

#[test]
fn test_range_policy_matches_grid() -> Result<()> {
    let today = pd(1403, 4, 15);
    let policy = RangePolicy::new().disable_future(true);
    let grid = generate_grid(1403, 4, today, &GridOptions::new().policy(policy), &HolidayCalendar::iranian())?;
    for cell in &grid.cells {
        assert_eq!(cell.is_disabled, cell.date > today);
    }
    Ok(())
}

#[test]
fn test_notifications_are_returned() -> Result<()> {
    let (mut picker, _) = picker(PickerConfig::default(), pd(1403, 1, 1))?;
    let notifications = picker.apply(Event::NextYear);
    assert_eq!(
        notifications,
        vec![Notification::MonthChange { year: 1404, month: 1 }, Notification::YearChange { year: 1404 }]
    );
    Ok(())
}

#[test]
fn test_disabled_picker_never_commits() -> Result<()> {
    let config = PickerConfig::builder().disabled(true).build()?;
    let (mut picker, calls) = picker(config, pd(1403, 5, 10))?;

    assert!(picker.apply(Event::Today).is_empty());
    assert!(picker.apply(Event::Input("1400/01/01".into())).is_empty());
    assert_eq!(picker.state().selected_date, None);
    assert_eq!(picker.state().input_value, "");
    assert!(calls.borrow().is_empty());
    Ok(())
}
