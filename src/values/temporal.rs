use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::core::{ErrorCode, FieldError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Emission date, `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmissionDate(NaiveDate);

impl EmissionDate {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(ErrorCode::InvalidDate, "emission_date", "YYYY-MM-DD", value))
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for EmissionDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for EmissionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for EmissionDate {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmissionDate {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<EmissionDate> for String {
    fn from(v: EmissionDate) -> String {
        v.to_string()
    }
}

impl ValueObject for EmissionDate {}

/// Emission time, `HH:MM:SS` (24-hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmissionTime(NaiveTime);

impl EmissionTime {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(ErrorCode::InvalidTime, "emission_time", "HH:MM:SS", value))
    }

    pub fn value(&self) -> NaiveTime {
        self.0
    }
}

/// Truncates to whole seconds, the precision the schema carries.
impl From<NaiveTime> for EmissionTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }
}

impl fmt::Display for EmissionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl FromStr for EmissionTime {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmissionTime {
    type Error = FieldError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<EmissionTime> for String {
    fn from(v: EmissionTime) -> String {
        v.to_string()
    }
}

impl ValueObject for EmissionTime {}
