// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clinic_booking_dispatch::DispatchError;
use clinic_booking_domain::{DomainError, ValidationErrors};

/// Errors that can occur while selecting or submitting a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated (e.g. an unknown provider id).
    DomainViolation(DomainError),
    /// The selection is not a valid booking yet.
    Validation(ValidationErrors),
    /// The notification center did not accept the booking.
    SubmissionFailed(DispatchError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Validation(errors) => write!(f, "Booking incomplete: {errors}"),
            Self::SubmissionFailed(err) => write!(f, "Submission failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::Validation(errors) => Some(errors),
            Self::SubmissionFailed(err) => Some(err),
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<DispatchError> for CoreError {
    fn from(err: DispatchError) -> Self {
        Self::SubmissionFailed(err)
    }
}
