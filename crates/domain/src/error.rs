// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building or resolving domain values.
///
/// Booking completeness problems are not reported here; those are
/// collected as [`crate::ValidationErrors`] so that every violated rule
/// reaches the caller at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic left the supported calendar range.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// The year cannot be written as four unsigned digits.
    DateOutOfRange {
        /// The rejected year.
        year: i32,
    },
    /// Provider reference data is invalid.
    InvalidProvider(String),
    /// Category reference data is invalid.
    InvalidCategory(String),
    /// Time slot label is invalid.
    InvalidTimeSlot(String),
    /// Two providers in one catalog share an identifier.
    DuplicateProvider(u32),
    /// Two categories in one catalog share an identifier.
    DuplicateCategory(u32),
    /// Two time slots in one catalog share a label.
    DuplicateTimeSlot(String),
    /// No provider with the given identifier exists in the catalog.
    ProviderNotFound(u32),
    /// No category with the given identifier exists in the catalog.
    CategoryNotFound(u32),
    /// No time slot with the given label exists in the catalog.
    TimeSlotNotFound(String),
    /// A review draft is missing required input.
    InvalidReview(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateOutOfRange { year } => {
                write!(f, "Year {year} is outside the supported range 0000-9999")
            }
            Self::InvalidProvider(msg) => write!(f, "Invalid provider: {msg}"),
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidTimeSlot(msg) => write!(f, "Invalid time slot: {msg}"),
            Self::DuplicateProvider(id) => {
                write!(f, "Provider with id {id} already exists in the catalog")
            }
            Self::DuplicateCategory(id) => {
                write!(f, "Category with id {id} already exists in the catalog")
            }
            Self::DuplicateTimeSlot(label) => {
                write!(f, "Time slot '{label}' already exists in the catalog")
            }
            Self::ProviderNotFound(id) => write!(f, "Provider {id} not found"),
            Self::CategoryNotFound(id) => write!(f, "Category {id} not found"),
            Self::TimeSlotNotFound(label) => write!(f, "Time slot '{label}' not found"),
            Self::InvalidReview(msg) => write!(f, "Invalid review: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
