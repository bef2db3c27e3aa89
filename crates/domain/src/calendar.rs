// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day handling for appointment selection.
//!
//! Appointments are chosen at calendar-day granularity. Time of day never
//! takes part in a comparison: callers resolve "today" in the device's
//! local zone and hand it in as a plain date.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month};

/// The only accepted textual form of a calendar date.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Earliest year a `YYYY-MM-DD` string can carry.
const MIN_YEAR: i32 = 0;

/// Latest year a `YYYY-MM-DD` string can carry.
const MAX_YEAR: i32 = 9999;

/// A single calendar day in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: Date,
}

impl CalendarDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is not a valid
    /// zero-padded calendar date with an unsigned four-digit year.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let parse_error = |error: String| DomainError::DateParseError {
            date_string: value.to_string(),
            error,
        };

        if value.starts_with(['+', '-']) {
            return Err(parse_error(String::from("the year must not carry a sign")));
        }
        let date: Date =
            Date::parse(value, DATE_FORMAT).map_err(|err| parse_error(err.to_string()))?;
        Self::from_date(date).map_err(|err| parse_error(err.to_string()))
    }

    /// Builds a date from its year, month and day numbers.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year
    /// * `month` - The month number (1-12)
    /// * `day` - The day of the month
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the combination does not
    /// name a real day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let describe = || format!("{year:04}-{month:02}-{day:02}");
        let month: Month = Month::try_from(month).map_err(|err| DomainError::DateParseError {
            date_string: describe(),
            error: err.to_string(),
        })?;
        let date: Date = Date::from_calendar_date(year, month, day).map_err(|err| {
            DomainError::DateParseError {
                date_string: describe(),
                error: err.to_string(),
            }
        })?;
        Self::from_date(date)
    }

    /// Wraps an existing `time::Date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` if the year is outside
    /// 0000-9999, which `YYYY-MM-DD` cannot represent.
    pub fn from_date(date: Date) -> Result<Self, DomainError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Self { date })
        } else {
            Err(DomainError::DateOutOfRange { year: date.year() })
        }
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the date `days` days later (or earlier, when negative).
    ///
    /// # Errors
    ///
    /// Returns an error if the result leaves the supported calendar range.
    pub fn add_days(&self, days: i64) -> Result<Self, DomainError> {
        self.date
            .checked_add(Duration::days(days))
            .and_then(|date| Self::from_date(date).ok())
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("adding {days} days to {self}"),
            })
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .date
            .format(DATE_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Decides whether a calendar day may be chosen for an appointment.
///
/// A day is selectable when it is today or later.
#[must_use]
pub fn is_selectable(candidate: CalendarDate, today: CalendarDate) -> bool {
    candidate >= today
}

/// String form of [`is_selectable`].
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if either string is malformed.
pub fn is_selectable_str(candidate: &str, today: &str) -> Result<bool, DomainError> {
    Ok(is_selectable(
        CalendarDate::parse(candidate)?,
        CalendarDate::parse(today)?,
    ))
}
