//! Availability of dates under past/future flags and absolute bounds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use taqvim_calendar::PersianDate;

/// Why a date cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisableReason {
    /// Earlier than the minimum bound.
    BeforeMin,
    /// Later than the maximum bound.
    AfterMax,
    /// Before today while past dates are disabled.
    Past,
    /// After today while future dates are disabled.
    Future,
}

/// Outcome of evaluating a date against a [`RangePolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub reasons: SmallVec<[DisableReason; 4]>,
}

impl Availability {
    pub fn is_disabled(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn has_reason(&self, reason: DisableReason) -> bool {
        self.reasons.contains(&reason)
    }
}

/// True when `date` lies within the optional inclusive bounds.
pub fn in_range(date: &PersianDate, min: Option<&PersianDate>, max: Option<&PersianDate>) -> bool {
    min.is_none_or(|min| date >= min) && max.is_none_or(|max| date <= max)
}

/// Constraints that disable dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePolicy {
    pub disable_past: bool,
    pub disable_future: bool,
    pub min_date: Option<PersianDate>,
    pub max_date: Option<PersianDate>,
}

impl RangePolicy {
    pub fn new() -> Self { Self::default() }

    pub fn disable_past(mut self, disable: bool) -> Self { self.disable_past = disable; self }
    pub fn disable_future(mut self, disable: bool) -> Self { self.disable_future = disable; self }
    pub fn min_date(mut self, date: Option<PersianDate>) -> Self { self.min_date = date; self }
    pub fn max_date(mut self, date: Option<PersianDate>) -> Self { self.max_date = date; self }

    /// Collects every violated constraint. All three checks always run.
    pub fn evaluate(&self, date: &PersianDate, today: &PersianDate) -> Availability {
        let mut reasons = SmallVec::new();

        if !in_range(date, self.min_date.as_ref(), self.max_date.as_ref()) {
            if self.min_date.is_some_and(|min| *date < min) {
                reasons.push(DisableReason::BeforeMin);
            }
            if self.max_date.is_some_and(|max| *date > max) {
                reasons.push(DisableReason::AfterMax);
            }
        }

        if self.disable_past && date < today {
            reasons.push(DisableReason::Past);
        }

        if self.disable_future && date > today {
            reasons.push(DisableReason::Future);
        }

        Availability { reasons }
    }

    pub fn is_disabled(&self, date: &PersianDate, today: &PersianDate) -> bool {
        self.evaluate(date, today).is_disabled()
    }
}
