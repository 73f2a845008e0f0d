//! `dd/MM/yyyy` calendar date wire format.
//!
//! # Responsibility
//! - Parse and format boundary dates in the external `dd/MM/yyyy` shape.
//! - Provide serde helpers for required and optional date fields.
//!
//! # Invariants
//! - Accepted text is exactly two-digit day, two-digit month, four-digit year.
//! - Parsed values are real calendar dates (`31/02/2020` is rejected).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%d/%m/%Y";

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid date shape regex"));

/// Boundary date parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    /// Text does not match `dd/MM/yyyy`.
    InvalidShape(String),
    /// Shape matches but the calendar date does not exist.
    InvalidDate(String),
}

impl Display for DateFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShape(value) => {
                write!(f, "date `{value}` must use the dd/MM/yyyy format")
            }
            Self::InvalidDate(value) => write!(f, "date `{value}` is not a valid calendar date"),
        }
    }
}

impl Error for DateFormatError {}

/// Parses one `dd/MM/yyyy` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = value.trim();
    if !DATE_SHAPE_RE.is_match(trimmed) {
        return Err(DateFormatError::InvalidShape(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| DateFormatError::InvalidDate(trimmed.to_string()))
}

/// Formats one date as `dd/MM/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).map_err(serde::de::Error::custom)
}

/// Serde helpers for `Option<NaiveDate>` fields.
pub mod option {
    use super::{format_date, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(value) => serializer.serialize_some(&format_date(*value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_date(&text)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
