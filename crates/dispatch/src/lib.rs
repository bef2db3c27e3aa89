// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Where finalized bookings go.
//!
//! The booking engine hands each [`Booking`] to a [`NotificationCenter`]
//! and treats the result as opaque: it never retries and never inspects a
//! [`DispatchError`] beyond passing it on. Transport (a remote API, local
//! storage) is entirely the implementor's concern.

mod inbox;

use clinic_booking_domain::Booking;
use serde::Serialize;

pub use inbox::{InMemoryNotificationCenter, Notification, NotificationKind};

/// The receiving side of a finalized booking.
pub trait NotificationCenter {
    /// Hands a booking off and returns the confirmation issued for it.
    ///
    /// # Errors
    ///
    /// Returns a `DispatchError` if the booking could not be accepted.
    fn submit(&mut self, booking: &Booking) -> Result<ConfirmationId, DispatchError>;
}

/// The identifier a notification center issues for an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConfirmationId(String);

impl ConfirmationId {
    /// Creates a new `ConfirmationId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConfirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure reported by a notification center.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The receiving side could not be reached or is not accepting bookings.
    #[error("Notification center unavailable: {reason}")]
    Unavailable {
        /// Why the booking could not be delivered.
        reason: String,
    },
    /// The receiving side refused the booking.
    #[error("Booking rejected: {reason}")]
    Rejected {
        /// Why the booking was refused.
        reason: String,
    },
}
