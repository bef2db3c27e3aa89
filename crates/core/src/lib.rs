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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod session;

#[cfg(test)]
mod tests;

use clinic_booking_dispatch::{ConfirmationId, NotificationCenter};
use clinic_booking_domain::{Booking, CalendarDate, SelectionSet, validate_booking};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use session::{BookingSession, SubmissionReceipt};

/// Validates a selection and submits the resulting booking.
///
/// This is the stateless form of [`BookingSession::submit`]: the selection
/// is only read, and resetting it afterwards is left to the caller.
///
/// # Arguments
///
/// * `selection` - The pending selections
/// * `today` - The current calendar day in the patient's local zone
/// * `center` - Where the finalized booking is sent
///
/// # Errors
///
/// Returns an error if:
/// - The selection violates booking rules
/// - The notification center refused the booking
pub fn submit_selection<N>(
    selection: &SelectionSet,
    today: CalendarDate,
    center: &mut N,
) -> Result<SubmissionReceipt, CoreError>
where
    N: NotificationCenter + ?Sized,
{
    let booking: Booking = validate_booking(selection, today)?;
    let confirmation_id: ConfirmationId = center.submit(&booking)?;
    Ok(SubmissionReceipt {
        booking,
        confirmation_id,
    })
}
