//! Lenient parsing of user-typed dates.

use std::str::FromStr;

use crate::date::PersianDate;
use crate::digits::{is_any_digit, to_ascii_digits};
use crate::error::TaqvimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearWidth {
    Four,
    Two,
}

/// One accepted input shape, e.g. `jYYYY/jM/jD`.
#[derive(Debug, Clone, Copy)]
struct InputPattern {
    year: YearWidth,
    separator: char,
    /// Month and day must be exactly two digits.
    padded: bool,
}

const INPUT_PATTERNS: [InputPattern; 6] = [
    InputPattern { year: YearWidth::Four, separator: '/', padded: true },
    InputPattern { year: YearWidth::Four, separator: '/', padded: false },
    InputPattern { year: YearWidth::Two, separator: '/', padded: true },
    InputPattern { year: YearWidth::Two, separator: '/', padded: false },
    InputPattern { year: YearWidth::Four, separator: '-', padded: true },
    InputPattern { year: YearWidth::Four, separator: '-', padded: false },
];

/// Two-digit years above this belong to the 1300s, the rest to the 1400s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 47;

fn all_ascii_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl InputPattern {
    fn apply(&self, text: &str) -> Option<PersianDate> {
        let mut parts = text.split(self.separator);
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        if ![year, month, day].iter().all(|p| all_ascii_digits(p)) {
            return None;
        }

        let year = match (self.year, year.len()) {
            (YearWidth::Four, 4) => year.parse::<i32>().ok()?,
            (YearWidth::Two, 2) => {
                let short = year.parse::<i32>().ok()?;
                short + if short > TWO_DIGIT_YEAR_PIVOT { 1300 } else { 1400 }
            }
            _ => return None,
        };

        let width_ok = |part: &str| if self.padded { part.len() == 2 } else { (1..=2).contains(&part.len()) };
        if !width_ok(month) || !width_ok(day) {
            return None;
        }

        PersianDate::new(year, month.parse().ok()?, day.parse().ok()?).ok()
    }
}

/// Keeps digits of any script, `/`, `-` and whitespace.
fn sanitize(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(|c| is_any_digit(*c) || *c == '/' || *c == '-' || c.is_whitespace())
        .collect();
    to_ascii_digits(&kept)
}

/// Parses free text into a date.
///
/// Foreign characters are dropped, Persian and Arabic-Indic digits are
/// accepted, and the first matching pattern among `jYYYY/jMM/jDD`,
/// `jYYYY/jM/jD`, `jYY/jMM/jDD`, `jYY/jM/jD`, `jYYYY-jMM-jDD` and
/// `jYYYY-jM-jD` that yields a real date wins. Returns `None` otherwise.
pub fn parse_input(input: &str) -> Option<PersianDate> {
    let cleaned = sanitize(input);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }

    let parsed = INPUT_PATTERNS.iter().find_map(|pattern| pattern.apply(cleaned));
    if parsed.is_none() {
        tracing::trace!(input, cleaned, "date input matched no pattern");
    }
    parsed
}

/// True if `input` is exactly a canonical `YYYY/MM/DD` date string.
pub fn is_valid_date_string(input: &str) -> bool {
    INPUT_PATTERNS[0]
        .apply(input)
        .is_some_and(|date| date.to_string() == input)
}

impl FromStr for PersianDate {
    type Err = TaqvimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_input(s).ok_or_else(|| TaqvimError::UnparsableInput { input: s.to_owned() })
    }
}
