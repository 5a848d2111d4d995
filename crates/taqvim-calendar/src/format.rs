//! Pattern formatting with moment-jalaali style tokens.
//!
//! | Token   | Output                          |
//! |---------|---------------------------------|
//! | `jYYYY` | Persian year, 4 digits          |
//! | `jYY`   | Persian year, last 2 digits     |
//! | `jMMMM` | Persian month name              |
//! | `jMM`   | Persian month, zero padded      |
//! | `jM`    | Persian month                   |
//! | `jDD`   | Persian day, zero padded        |
//! | `jD`    | Persian day                     |
//! | `dddd`  | weekday name                    |
//! | `dd`    | weekday initial                 |
//! | `YYYY`, `MM`, `DD` | Gregorian year, month, day |
//!
//! Text inside `[...]` is copied verbatim; any other character is literal.

use chrono::Datelike;
use taqvim_types::Locale;

use crate::date::PersianDate;

/// Canonical display and storage pattern.
pub const DEFAULT_FORMAT: &str = "jYYYY/jMM/jDD";

/// Tokens ordered so that longer ones win over their prefixes.
const TOKENS: [&str; 12] = [
    "jYYYY", "jMMMM", "jYY", "jMM", "jDD", "jM", "jD", "dddd", "YYYY", "dd", "MM", "DD",
];

/// Formats a date with Persian names.
pub fn format_date(date: &PersianDate, pattern: &str) -> String {
    format_date_localized(date, pattern, Locale::Fa)
}

/// Formats a date, taking month and weekday names from `locale`.
///
/// Digits are always ASCII; use [`render_digits`](crate::digits::render_digits)
/// for display.
pub fn format_date_localized(date: &PersianDate, pattern: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                out.push_str(&rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }

        match TOKENS.iter().find(|t| rest.starts_with(**t)) {
            Some(token) => {
                render_token(&mut out, token, date, locale);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn render_token(out: &mut String, token: &str, date: &PersianDate, locale: Locale) {
    match token {
        "jYYYY" => out.push_str(&format!("{:04}", date.year())),
        "jYY" => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
        "jMMMM" => out.push_str(locale.month_name(date.month())),
        "jMM" => out.push_str(&format!("{:02}", date.month())),
        "jM" => out.push_str(&date.month().to_string()),
        "jDD" => out.push_str(&format!("{:02}", date.day())),
        "jD" => out.push_str(&date.day().to_string()),
        "dddd" => out.push_str(locale.weekday_name(date.weekday())),
        "dd" => out.push_str(date.weekday().short_name()),
        "YYYY" => out.push_str(&format!("{:04}", date.to_gregorian().year())),
        "MM" => out.push_str(&format!("{:02}", date.to_gregorian().month())),
        "DD" => out.push_str(&format!("{:02}", date.to_gregorian().day())),
        _ => out.push_str(token),
    }
}
