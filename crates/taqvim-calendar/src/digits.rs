//! Digit transliteration between ASCII, Persian and Arabic-Indic forms.

use taqvim_types::Locale;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Returns the ASCII value of a Persian or Arabic-Indic digit.
fn eastern_digit_value(c: char) -> Option<u32> {
    let code = c as u32;
    if (PERSIAN_ZERO..PERSIAN_ZERO + 10).contains(&code) {
        Some(code - PERSIAN_ZERO)
    } else if (ARABIC_INDIC_ZERO..ARABIC_INDIC_ZERO + 10).contains(&code) {
        Some(code - ARABIC_INDIC_ZERO)
    } else {
        None
    }
}

/// True for ASCII, Persian and Arabic-Indic digits.
pub fn is_any_digit(c: char) -> bool {
    c.is_ascii_digit() || eastern_digit_value(c).is_some()
}

/// Replaces Persian and Arabic-Indic digits with ASCII digits.
pub fn to_ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match eastern_digit_value(c) {
            Some(value) => char::from_digit(value, 10).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Replaces ASCII digits with Persian digits.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(value) if c.is_ascii_digit() => {
                char::from_u32(PERSIAN_ZERO + value).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Renders digits for display in the given locale.
pub fn render_digits(input: &str, locale: Locale) -> String {
    match locale {
        Locale::Fa => to_persian_digits(input),
        Locale::En => input.to_owned(),
    }
}
