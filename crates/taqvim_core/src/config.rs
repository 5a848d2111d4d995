//! Picker configuration, presets and the year selector helpers.

use serde::{Deserialize, Serialize};
use taqvim_calendar::{PersianDate, TaqvimError, DEFAULT_FORMAT};
use taqvim_rules::RangePolicy;
use taqvim_types::Locale;

/// Placeholder shown for an empty input.
pub const DEFAULT_PLACEHOLDER: &str = "انتخاب تاریخ";

/// Years per page in the year selector.
pub const YEARS_PER_PAGE: usize = 20;

/// Default look-back passed to [`available_years`].
pub const DEFAULT_YEAR_RANGE: i32 = 50;

/// Date bounds serialized as canonical `YYYY/MM/DD` strings.
mod canonical_date {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use taqvim_calendar::{is_valid_date_string, PersianDate};

    pub fn serialize<S: Serializer>(date: &Option<PersianDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_some(&date.to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PersianDate>, D::Error> {
        let Some(text) = Option::<String>::deserialize(d)? else {
            return Ok(None);
        };
        if !is_valid_date_string(&text) {
            return Err(de::Error::custom(format!("expected a YYYY/MM/DD date, got {text:?}")));
        }
        text.parse().map(Some).map_err(de::Error::custom)
    }
}

/// Picker behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfig {
    /// The whole widget ignores activation.
    pub disabled: bool,
    pub disable_past: bool,
    pub disable_future: bool,
    #[serde(with = "canonical_date")]
    pub min_date: Option<PersianDate>,
    #[serde(with = "canonical_date")]
    pub max_date: Option<PersianDate>,
    pub allow_clear: bool,
    pub show_holidays: bool,
    /// Offers the Today and Clear shortcuts.
    pub quick_actions: bool,
    /// Output pattern, see [`taqvim_calendar::format`].
    pub format: String,
    pub locale: Locale,
    pub placeholder: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            disable_past: false,
            disable_future: false,
            min_date: None,
            max_date: None,
            allow_clear: true,
            show_holidays: true,
            quick_actions: true,
            format: DEFAULT_FORMAT.to_owned(),
            locale: Locale::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl PickerConfig {
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::new()
    }

    /// Defaults merged with a preset.
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        preset.apply(&mut config);
        config
    }

    /// Parses a JSON document of camelCase fields. An optional `preset` key
    /// is applied first and the remaining fields override it.
    ///
    /// # Errors
    /// `InvalidConfiguration` for malformed JSON, bad date bounds, or a
    /// configuration that fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, TaqvimError> {
        let document: ConfigDocument = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected picker configuration");
            TaqvimError::invalid_config(e.to_string())
        })?;

        let mut builder = PickerConfigBuilder::new();
        if let Some(preset) = document.preset {
            builder = builder.preset(preset);
        }
        builder.overrides(document.overrides).build()
    }

    pub fn to_json(&self) -> Result<String, TaqvimError> {
        serde_json::to_string(self).map_err(|e| TaqvimError::invalid_config(e.to_string()))
    }

    /// Checks bound ordering and the format pattern.
    pub fn validate(&self) -> Result<(), TaqvimError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(TaqvimError::invalid_config(format!(
                    "minDate {min} is after maxDate {max}"
                )));
            }
        }
        if self.format.trim().is_empty() {
            return Err(TaqvimError::invalid_config("format must not be empty"));
        }
        Ok(())
    }

    /// The availability rules implied by this configuration.
    pub fn range_policy(&self) -> RangePolicy {
        RangePolicy::new()
            .disable_past(self.disable_past)
            .disable_future(self.disable_future)
            .min_date(self.min_date)
            .max_date(self.max_date)
    }
}

/// Named starting points for common fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preset {
    Default,
    BirthDate,
    Reservation,
    Expiry,
    Appointment,
    Event,
    Deadline,
}

impl Default for Preset {
    fn default() -> Self {
        Self::Default
    }
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::BirthDate,
        Preset::Reservation,
        Preset::Expiry,
        Preset::Appointment,
        Preset::Event,
        Preset::Deadline,
    ];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Preset::Default => DEFAULT_PLACEHOLDER,
            Preset::BirthDate => "تاریخ تولد",
            Preset::Reservation => "انتخاب تاریخ رزرو",
            Preset::Expiry => "تاریخ انقضا",
            Preset::Appointment => "تاریخ قرار ملاقات",
            Preset::Event => "تاریخ رویداد",
            Preset::Deadline => "ضرب‌الاجل",
        }
    }

    fn apply(&self, config: &mut PickerConfig) {
        config.placeholder = self.placeholder().to_owned();
        config.quick_actions = true;
        config.format = DEFAULT_FORMAT.to_owned();

        match self {
            Preset::Default => {}
            Preset::BirthDate => {
                config.disable_future = true;
                config.show_holidays = false;
            }
            Preset::Reservation | Preset::Appointment => {
                config.disable_past = true;
                config.show_holidays = true;
            }
            Preset::Expiry | Preset::Deadline => {
                config.disable_past = true;
                config.show_holidays = false;
            }
            Preset::Event => config.show_holidays = true,
        }
    }
}

/// Field-by-field overrides, as read from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub disabled: Option<bool>,
    pub disable_past: Option<bool>,
    pub disable_future: Option<bool>,
    #[serde(default, deserialize_with = "canonical_date::deserialize")]
    pub min_date: Option<PersianDate>,
    #[serde(default, deserialize_with = "canonical_date::deserialize")]
    pub max_date: Option<PersianDate>,
    pub allow_clear: Option<bool>,
    pub show_holidays: Option<bool>,
    pub quick_actions: Option<bool>,
    pub format: Option<String>,
    pub locale: Option<Locale>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    #[serde(default)]
    preset: Option<Preset>,
    #[serde(flatten)]
    overrides: ConfigOverrides,
}

/// Builder with validation for [`PickerConfig`].
#[derive(Debug, Clone, Default)]
pub struct PickerConfigBuilder {
    config: PickerConfig,
}

impl PickerConfigBuilder {
    pub fn new() -> Self { Self::default() }

    /// Replaces the current fields with the preset's. Call before the
    /// individual setters.
    pub fn preset(mut self, preset: Preset) -> Self { self.config = PickerConfig::from_preset(preset); self }

    pub fn disabled(mut self, disabled: bool) -> Self { self.config.disabled = disabled; self }
    pub fn disable_past(mut self, disable: bool) -> Self { self.config.disable_past = disable; self }
    pub fn disable_future(mut self, disable: bool) -> Self { self.config.disable_future = disable; self }
    pub fn min_date(mut self, date: PersianDate) -> Self { self.config.min_date = Some(date); self }
    pub fn max_date(mut self, date: PersianDate) -> Self { self.config.max_date = Some(date); self }
    pub fn allow_clear(mut self, allow: bool) -> Self { self.config.allow_clear = allow; self }
    pub fn show_holidays(mut self, show: bool) -> Self { self.config.show_holidays = show; self }
    pub fn quick_actions(mut self, enabled: bool) -> Self { self.config.quick_actions = enabled; self }
    pub fn format(mut self, pattern: impl Into<String>) -> Self { self.config.format = pattern.into(); self }
    pub fn locale(mut self, locale: Locale) -> Self { self.config.locale = locale; self }
    pub fn placeholder(mut self, text: impl Into<String>) -> Self { self.config.placeholder = text.into(); self }

    /// Sets every field present in `overrides`.
    pub fn overrides(mut self, overrides: ConfigOverrides) -> Self {
        let c = &mut self.config;
        if let Some(v) = overrides.disabled { c.disabled = v; }
        if let Some(v) = overrides.disable_past { c.disable_past = v; }
        if let Some(v) = overrides.disable_future { c.disable_future = v; }
        if overrides.min_date.is_some() { c.min_date = overrides.min_date; }
        if overrides.max_date.is_some() { c.max_date = overrides.max_date; }
        if let Some(v) = overrides.allow_clear { c.allow_clear = v; }
        if let Some(v) = overrides.show_holidays { c.show_holidays = v; }
        if let Some(v) = overrides.quick_actions { c.quick_actions = v; }
        if let Some(v) = overrides.format { c.format = v; }
        if let Some(v) = overrides.locale { c.locale = v; }
        if let Some(v) = overrides.placeholder { c.placeholder = v; }
        self
    }

    /// Builds and validates.
    pub fn build(self) -> Result<PickerConfig, TaqvimError> {
        if let Err(e) = self.config.validate() {
            tracing::warn!(error = %e, "rejected picker configuration");
            return Err(e);
        }
        Ok(self.config)
    }
}

/// Years offered by the year selector, newest first.
///
/// Spans from `current - max(range, 100)` up to `current + 10` so that birth
/// dates stay reachable.
pub fn available_years(current: i32, range: i32) -> Vec<i32> {
    let start = current - range.max(100);
    let end = current + 10;
    (start..=end).rev().collect()
}

/// The twenty consecutive years shown on selector page `page`.
pub fn year_page(page: i32) -> [i32; YEARS_PER_PAGE] {
    let start = page * YEARS_PER_PAGE as i32;
    std::array::from_fn(|i| start + i as i32)
}

/// Selector page containing `year`.
pub fn page_of_year(year: i32) -> i32 {
    year.div_euclid(YEARS_PER_PAGE as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pd(y: i32, m: u8, d: u8) -> PersianDate {
        PersianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert!(config.allow_clear);
        assert!(config.show_holidays);
        assert!(config.quick_actions);
        assert!(!config.disabled);
        assert_eq!(config.format, "jYYYY/jMM/jDD");
        assert_eq!(config.locale, Locale::Fa);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_presets() {
        let birth = PickerConfig::from_preset(Preset::BirthDate);
        assert!(birth.disable_future && !birth.disable_past && !birth.show_holidays);
        assert_eq!(birth.placeholder, "تاریخ تولد");

        let reservation = PickerConfig::from_preset(Preset::Reservation);
        assert!(reservation.disable_past && reservation.show_holidays);

        let deadline = PickerConfig::from_preset(Preset::Deadline);
        assert!(deadline.disable_past && !deadline.show_holidays);

        for preset in Preset::ALL {
            assert!(PickerConfig::from_preset(preset).validate().is_ok());
        }
    }

    #[test]
    fn test_setters_override_preset() {
        let config = PickerConfig::builder()
            .preset(Preset::Expiry)
            .show_holidays(true)
            .placeholder("custom")
            .build()
            .unwrap();
        assert!(config.disable_past);
        assert!(config.show_holidays);
        assert_eq!(config.placeholder, "custom");
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let result = PickerConfig::builder()
            .min_date(pd(1403, 2, 1))
            .max_date(pd(1403, 1, 1))
            .build();
        assert!(matches!(result, Err(TaqvimError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_empty_format_is_rejected() {
        assert!(PickerConfig::builder().format("  ").build().is_err());
    }

    #[test]
    fn test_from_json() {
        let config = PickerConfig::from_json(
            r#"{"preset":"reservation","minDate":"1403/01/10","maxDate":"1403/01/20","locale":"en"}"#,
        )
        .unwrap();
        assert!(config.disable_past);
        assert_eq!(config.min_date, Some(pd(1403, 1, 10)));
        assert_eq!(config.max_date, Some(pd(1403, 1, 20)));
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.placeholder, "انتخاب تاریخ رزرو");
    }

    #[test]
    fn test_from_json_rejects_loose_bounds() {
        assert!(PickerConfig::from_json(r#"{"minDate":"1403/1/1"}"#).is_err());
        assert!(PickerConfig::from_json(r#"{"maxDate":"1404/12/30"}"#).is_err());
        assert!(PickerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_json_round_trip_uses_canonical_strings() {
        let config = PickerConfig::builder().min_date(pd(1400, 5, 5)).build().unwrap();
        let json = config.to_json().unwrap();
        assert!(json.contains(r#""minDate":"1400/05/05""#));
        assert!(json.contains(r#""maxDate":null"#));
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_range_policy() {
        let config = PickerConfig::from_preset(Preset::BirthDate);
        let policy = config.range_policy();
        assert!(policy.disable_future);
        assert!(policy.is_disabled(&pd(1403, 1, 2), &pd(1403, 1, 1)));
    }

    #[test]
    fn test_available_years() {
        let years = available_years(1403, DEFAULT_YEAR_RANGE);
        assert_eq!(years.first(), Some(&1413));
        assert_eq!(years.last(), Some(&1303));
        assert_eq!(years.len(), 111);

        let wide = available_years(1403, 150);
        assert_eq!(wide.last(), Some(&1253));
    }

    #[test]
    fn test_year_pages() {
        assert_eq!(page_of_year(1403), 70);
        let page = year_page(70);
        assert_eq!(page[0], 1400);
        assert_eq!(page[19], 1419);
        assert!(page.contains(&1403));
    }
}
