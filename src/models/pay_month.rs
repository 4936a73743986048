//! Reporting-month value type.
//!
//! This module defines [`PayMonth`], the `"YYYY-MM"` month key used to
//! address attendance sheets, loan schedules, and payroll records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar month used as the payroll reporting period.
///
/// Months are totally ordered, so loan start months and settlement months
/// can be compared directly. The serialized form is `"YYYY-MM"`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use std::str::FromStr;
///
/// let month = PayMonth::from_str("2025-07").unwrap();
/// assert_eq!(month.days_in_month(), 31);
/// assert_eq!(month.succ().to_string(), "2025-08");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PayMonth {
    year: i32,
    month: u32,
}

impl PayMonth {
    /// Creates a month from a year and a 1-based month number.
    ///
    /// Returns `None` if `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month as a calendar date.
    pub fn first_day(&self) -> NaiveDate {
        // Safe: month is validated on construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| unreachable!("validated on construction"))
    }

    /// The number of calendar days in the month.
    ///
    /// An employee's attendance sequence for this month must have exactly
    /// this many entries.
    pub fn days_in_month(&self) -> u32 {
        let next = self.succ();
        next.first_day()
            .signed_duration_since(self.first_day())
            .num_days() as u32
    }

    /// The month immediately following this one.
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a month string is not of the form `"YYYY-MM"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePayMonthError(String);

impl fmt::Display for ParsePayMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month '{}', expected YYYY-MM", self.0)
    }
}

impl std::error::Error for ParsePayMonthError {}

impl FromStr for PayMonth {
    type Err = ParsePayMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePayMonthError(s.to_string());

        let (year_str, month_str) = s.split_once('-').ok_or_else(err)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(err());
        }
        let year: i32 = year_str.parse().map_err(|_| err())?;
        let month: u32 = month_str.parse().map_err(|_| err())?;

        PayMonth::new(year, month).ok_or_else(err)
    }
}

impl Serialize for PayMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PayMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
