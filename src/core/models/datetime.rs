//! Purchase date and time value types
//!
//! Both types only exist in a parsed state: the layout is enforced before a
//! value is constructed, and [`Display`](std::fmt::Display) renders the same
//! canonical string that was accepted.
//!
//! # Examples
//!
//! ```
//! use receipt_points::core::models::{PurchaseDate, PurchaseTime};
//!
//! let date: PurchaseDate = "2022-01-01".parse().unwrap();
//! assert_eq!(date.to_string(), "2022-01-01");
//!
//! let time: PurchaseTime = "13:01".parse().unwrap();
//! assert_eq!(time.to_string(), "13:01");
//!
//! assert!("2022-1-02".parse::<PurchaseDate>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// strftime layout of a purchase date
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// strftime layout of a purchase time
pub const TIME_LAYOUT: &str = "%H:%M";

// chrono accepts single-digit months and short years, so the exact shape is
// checked first.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));
static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// Errors raised while decoding a purchase date or time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateTimeError {
    /// `purchaseDate` was present but not a string
    #[error("purchaseDate field must be a string")]
    DateNotString,

    /// `purchaseDate` did not match `YYYY-MM-DD` or named no real day
    #[error("purchaseDate must be in format YYYY-MM-DD")]
    InvalidDate,

    /// `purchaseTime` was present but not a string
    #[error("purchaseTime field must be a string")]
    TimeNotString,

    /// `purchaseTime` did not match `HH:MM` or named no real time
    #[error("purchaseTime must be in format HH:MM")]
    InvalidTime,
}

/// Calendar day a receipt was issued on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseDate(NaiveDate);

impl PurchaseDate {
    /// Wrap an already-valid calendar date
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Day of the month, starting at 1
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl FromStr for PurchaseDate {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !DATE_SHAPE.is_match(s) {
            return Err(DateTimeError::InvalidDate);
        }
        NaiveDate::parse_from_str(s, DATE_LAYOUT)
            .map(Self)
            .map_err(|_| DateTimeError::InvalidDate)
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_LAYOUT))
    }
}

impl Serialize for PurchaseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PurchaseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)
            .map_err(|_| D::Error::custom(DateTimeError::DateNotString))?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Wall-clock time a receipt was issued at, minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PurchaseTime(NaiveTime);

impl PurchaseTime {
    /// Build from an hour and minute, `None` if out of range
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Hour of the day, 0 to 23
    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    /// Minute of the hour, 0 to 59
    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for PurchaseTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !TIME_SHAPE.is_match(s) {
            return Err(DateTimeError::InvalidTime);
        }
        NaiveTime::parse_from_str(s, TIME_LAYOUT)
            .map(Self)
            .map_err(|_| DateTimeError::InvalidTime)
    }
}

impl fmt::Display for PurchaseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_LAYOUT))
    }
}

impl Serialize for PurchaseTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PurchaseTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)
            .map_err(|_| D::Error::custom(DateTimeError::TimeNotString))?;
        raw.parse().map_err(D::Error::custom)
    }
}
