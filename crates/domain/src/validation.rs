// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::Booking;
use crate::calendar::{CalendarDate, is_selectable};
use crate::error::DomainError;
use crate::selection::SelectionSet;
use crate::storefront::ReviewDraft;
use serde::Serialize;

/// A single booking rule violation.
///
/// Variants are declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ValidationError {
    /// No date has been selected.
    MissingDate,
    /// The selected date is before today.
    PastDate,
    /// No provider has been selected.
    MissingProvider,
    /// No category has been selected.
    MissingCategory,
    /// No time slot has been selected.
    MissingTime,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Please select a date"),
            Self::PastDate => write!(f, "The selected date is in the past"),
            Self::MissingProvider => write!(f, "Please select a provider"),
            Self::MissingCategory => write!(f, "Please select an appointment type"),
            Self::MissingTime => write!(f, "Please select a time"),
        }
    }
}

/// Every rule a selection violated, in reporting order.
///
/// Never empty: an empty set means validation succeeded and a
/// [`Booking`] was produced instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Returns the violations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns whether a specific violation was reported.
    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the violations in reporting order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a selection and, if every rule holds, produces a [`Booking`].
///
/// Rules are checked in a fixed order so results are deterministic:
/// date (missing or past, never both), provider, category, time. All
/// violations are collected rather than stopping at the first.
///
/// The selection is not modified. Whether to reset it after a successful
/// booking is the caller's decision.
///
/// # Arguments
///
/// * `selection` - The pending selections
/// * `today` - The current calendar day in the patient's local zone
///
/// # Errors
///
/// Returns every violated rule if the selection cannot become a booking.
pub fn validate_booking(
    selection: &SelectionSet,
    today: CalendarDate,
) -> Result<Booking, ValidationErrors> {
    let mut errors: Vec<ValidationError> = Vec::new();

    match selection.date() {
        None => errors.push(ValidationError::MissingDate),
        Some(date) if !is_selectable(date, today) => errors.push(ValidationError::PastDate),
        Some(_) => {}
    }
    if selection.provider().is_none() {
        errors.push(ValidationError::MissingProvider);
    }
    if selection.category().is_none() {
        errors.push(ValidationError::MissingCategory);
    }
    if selection.time().is_none() {
        errors.push(ValidationError::MissingTime);
    }

    match (
        selection.date(),
        selection.provider(),
        selection.category(),
        selection.time(),
    ) {
        (Some(date), Some(provider), Some(category), Some(time)) if errors.is_empty() => Ok(
            Booking::new(date, provider.clone(), category.clone(), time.clone()),
        ),
        _ => Err(ValidationErrors { errors }),
    }
}

/// Validates that a feedback draft is ready to submit.
///
/// # Arguments
///
/// * `draft` - The feedback form contents
///
/// # Errors
///
/// Returns `DomainError::InvalidReview` for the first problem found:
/// - No star rating chosen (rating 0)
/// - Rating above 5
/// - Blank comment
/// - No service chosen
pub fn validate_review_draft(draft: &ReviewDraft) -> Result<(), DomainError> {
    // Rule: a rating of 0 means no star was tapped
    if draft.rating == 0 {
        return Err(DomainError::InvalidReview(String::from(
            "Please choose a rating",
        )));
    }

    if draft.rating > 5 {
        return Err(DomainError::InvalidReview(format!(
            "Rating must be between 1 and 5, got {}",
            draft.rating
        )));
    }

    if draft.comment.trim().is_empty() {
        return Err(DomainError::InvalidReview(String::from(
            "Comment cannot be empty",
        )));
    }

    if draft.service.trim().is_empty() {
        return Err(DomainError::InvalidReview(String::from(
            "Please choose a service",
        )));
    }

    Ok(())
}
