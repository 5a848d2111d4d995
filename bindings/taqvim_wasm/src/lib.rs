//! WASM bindings for taqvim - Persian date picker engine
//!
//! The browser host forwards DOM events to a `Picker` and renders the state
//! and grid it returns.

use chrono::NaiveDate;
use serde::Serialize;
use taqvim_core::{
    generate_grid, parse_input, DatePicker, Event, GridOptions, HolidayCalendar, Key, PersianDate,
    PickerConfig, TaqvimError,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(js_error)
}

fn load_config(config_json: Option<String>) -> Result<PickerConfig, TaqvimError> {
    match config_json {
        Some(json) => PickerConfig::from_json(&json),
        None => Ok(PickerConfig::default()),
    }
}

/// WASM-friendly view of a date for TypeScript generation.
#[derive(Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// Canonical `YYYY/MM/DD`.
    pub persian: String,
    /// ISO `YYYY-MM-DD`.
    pub gregorian: String,
    pub weekday: String,
}

impl From<PersianDate> for WasmDate {
    fn from(date: PersianDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            persian: date.to_string(),
            gregorian: date.to_gregorian().format("%Y-%m-%d").to_string(),
            weekday: date.weekday().to_string(),
        }
    }
}

/// Parses free text (any digit script). Returns `null` when nothing matches.
///
/// # Example (JavaScript)
/// ```js
/// const date = parse("۱۴۰۳/۰۱/۰۱");
/// console.log(date.gregorian); // "2024-03-20"
/// ```
#[wasm_bindgen]
pub fn parse(input: &str) -> Result<JsValue, JsValue> {
    match parse_input(input) {
        Some(date) => to_js(&WasmDate::from(date)),
        None => Ok(JsValue::NULL),
    }
}

/// Converts `YYYY/MM/DD` to ISO `YYYY-MM-DD`.
#[wasm_bindgen(js_name = toGregorian)]
pub fn to_gregorian(persian: &str) -> Result<String, JsValue> {
    let date: PersianDate = persian.parse().map_err(js_error)?;
    Ok(date.to_gregorian().format("%Y-%m-%d").to_string())
}

/// Converts ISO `YYYY-MM-DD` to `YYYY/MM/DD`.
#[wasm_bindgen(js_name = toPersian)]
pub fn to_persian(gregorian: &str) -> Result<String, JsValue> {
    let date = NaiveDate::parse_from_str(gregorian, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date format: {}", e)))?;
    taqvim_core::to_persian(date).map(|d| d.to_string()).map_err(js_error)
}

/// Builds the 42-cell page for a month under an optional JSON configuration.
#[wasm_bindgen(js_name = generateGrid)]
pub fn generate_grid_js(year: i32, month: u8, config_json: Option<String>) -> Result<JsValue, JsValue> {
    let config = load_config(config_json).map_err(js_error)?;
    let today = PersianDate::today().map_err(js_error)?;
    let options = GridOptions::new()
        .policy(config.range_policy())
        .show_holidays(config.show_holidays)
        .locale(config.locale);
    let grid = generate_grid(year, month, today, &options, &HolidayCalendar::iranian()).map_err(js_error)?;
    to_js(&grid)
}

/// Class-based picker session.
///
/// # Example (JavaScript)
/// ```js
/// const picker = new Picker('{"preset":"birthDate"}');
/// picker.apply({ type: "activate" });
/// render(picker.state(), picker.grid());
/// const notes = picker.apply({ type: "selectDate", payload: { year: 1370, month: 6, day: 1 } });
/// ```
#[wasm_bindgen]
pub struct Picker {
    inner: DatePicker,
}

#[wasm_bindgen]
impl Picker {
    /// Creates a picker from a JSON configuration and an optional initial value.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, value: Option<String>) -> Result<Picker, JsValue> {
        console_error_panic_hook::set_once();
        let config = load_config(config_json).map_err(js_error)?;
        let inner = DatePicker::new(config).map_err(js_error)?.with_value(value.as_deref());
        Ok(Picker { inner })
    }

    /// Applies an event object and returns the resulting notifications.
    pub fn apply(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: Event = serde_wasm_bindgen::from_value(event).map_err(js_error)?;
        to_js(&self.inner.apply(event))
    }

    /// Forwards a DOM `keydown` key name.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.apply(Event::Key(Key::from_dom(key))))
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.state())
    }

    pub fn grid(&self) -> Result<JsValue, JsValue> {
        let grid = self.inner.grid().map_err(js_error)?;
        to_js(&grid)
    }

    /// True while document-level click and key listeners should be attached.
    #[wasm_bindgen(js_name = wantsGlobalListeners)]
    pub fn wants_global_listeners(&self) -> bool {
        self.inner.wants_global_listeners()
    }

    pub fn placeholder(&self) -> String {
        self.inner.config().placeholder.clone()
    }
}
