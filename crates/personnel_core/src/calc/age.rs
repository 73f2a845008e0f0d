//! Elapsed-time arithmetic between two calendar dates.
//!
//! # Responsibility
//! - Convert `(birth, reference)` into days, total months or fractional years.
//! - Own the calendar-aware month/day borrow rule.
//!
//! # Invariants
//! - All functions are pure; "today" is always passed in by the caller.
//! - A reference date before the birth date yields negative quantities; it
//!   is never rejected here.
//! - Fractional years use the 365.2425 day divisor and round half-up to two
//!   places.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};

const DAYS_PER_YEAR: f64 = 365.2425;
const YEARS_SCALE: u32 = 2;

/// Output unit accepted by age computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeUnit {
    #[serde(rename = "dias")]
    Days,
    #[serde(rename = "meses")]
    Months,
    #[serde(rename = "anos")]
    Years,
}

impl AgeUnit {
    /// Parses a unit after trimming and lower-casing; `None` when unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "dias" => Some(Self::Days),
            "meses" => Some(Self::Months),
            "anos" => Some(Self::Years),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Days => "dias",
            Self::Months => "meses",
            Self::Years => "anos",
        }
    }
}

/// Computed age: whole count for days/months, rounded decimal for years.
///
/// Serialized as a bare JSON number; years keep their two places (`30.00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AgeValue {
    Whole(i64),
    Fractional(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal),
}

impl AgeValue {
    /// Integers without a fractional part are `Whole`; anything else
    /// (including `30.00`) stays `Fractional`.
    fn from_decimal(value: Decimal) -> Self {
        if value.scale() == 0 {
            if let Some(whole) = value.to_i64() {
                return Self::Whole(whole);
            }
        }
        Self::Fractional(value)
    }
}

impl<'de> Deserialize<'de> for AgeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer).map(Self::from_decimal)
    }
}

impl Display for AgeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whole(value) => write!(f, "{value}"),
            Self::Fractional(value) => write!(f, "{value}"),
        }
    }
}

/// Calendar period split into years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl Period {
    pub fn total_months(&self) -> i64 {
        self.years * 12 + self.months
    }
}

/// Splits the interval `[start, end)` into years, months and days.
///
/// Months borrow from days when the end day-of-month has not been reached;
/// the remaining days are counted from `start` advanced by the whole months
/// (clamped to the end of a shorter month).
pub fn period_between(start: NaiveDate, end: NaiveDate) -> Period {
    let mut total_months = month_index(end) - month_index(start);
    let mut days = i64::from(end.day()) - i64::from(start.day());

    if total_months > 0 && days < 0 {
        total_months -= 1;
        // anchor never passes `end`, so the fallback is unreachable
        let anchor = u32::try_from(total_months)
            .ok()
            .and_then(|months| start.checked_add_months(Months::new(months)))
            .unwrap_or(end);
        days = (end - anchor).num_days();
    } else if total_months < 0 && days > 0 {
        total_months += 1;
        days -= length_of_month(end);
    }

    Period {
        years: total_months / 12,
        months: total_months % 12,
        days,
    }
}

/// Whole days from `birth` to `reference` (midnight to midnight).
pub fn age_in_days(birth: NaiveDate, reference: NaiveDate) -> i64 {
    (reference - birth).num_days()
}

/// Total whole calendar months from `birth` to `reference`.
pub fn age_in_months(birth: NaiveDate, reference: NaiveDate) -> i64 {
    period_between(birth, reference).total_months()
}

/// Unrounded fractional years: `years + months/12 + days/365.2425`.
pub fn age_in_years_raw(birth: NaiveDate, reference: NaiveDate) -> f64 {
    let period = period_between(birth, reference);
    period.years as f64 + period.months as f64 / 12.0 + period.days as f64 / DAYS_PER_YEAR
}

/// Fractional years rounded to two places, half-up.
///
/// Returns `None` only if the float cannot be represented as a decimal.
pub fn age_in_years(birth: NaiveDate, reference: NaiveDate) -> Option<Decimal> {
    let raw = age_in_years_raw(birth, reference);
    let mut rounded = Decimal::from_f64_retain(raw)?
        .round_dp_with_strategy(YEARS_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(YEARS_SCALE);
    Some(rounded)
}

/// Computes the age of `birth` at `reference` in the requested unit.
pub fn compute_age(unit: AgeUnit, birth: NaiveDate, reference: NaiveDate) -> Option<AgeValue> {
    match unit {
        AgeUnit::Days => Some(AgeValue::Whole(age_in_days(birth, reference))),
        AgeUnit::Months => Some(AgeValue::Whole(age_in_months(birth, reference))),
        AgeUnit::Years => age_in_years(birth, reference).map(AgeValue::Fractional),
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

fn length_of_month(date: NaiveDate) -> i64 {
    let first = date.with_day(1).unwrap_or(date);
    let next_first = first.checked_add_months(Months::new(1)).unwrap_or(first);
    (next_first - first).num_days()
}
