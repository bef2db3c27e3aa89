// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::submit_selection;
use clinic_booking_dispatch::{ConfirmationId, NotificationCenter};
use clinic_booking_domain::{Booking, CalendarDate, Catalog, SelectionSet, SelectionSnapshot};

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// The booking that was handed off.
    pub booking: Booking,
    /// The confirmation issued by the notification center.
    pub confirmation_id: ConfirmationId,
}

/// One patient's booking flow against a fixed catalog.
///
/// The session owns the pending selections. They survive failed
/// submissions so the patient can correct them, and are cleared after a
/// successful submission or an explicit cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    catalog: Catalog,
    selection: SelectionSet,
}

impl BookingSession {
    /// Starts a session with nothing selected.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
        }
    }

    /// Returns the catalog this session selects from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the pending selections.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns a read-only copy of the pending selections.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.selection.snapshot()
    }

    /// Applies a selection command.
    ///
    /// On error the pending selections are left as they were.
    ///
    /// # Errors
    ///
    /// Returns an error if the command references an unknown catalog entry.
    pub fn execute(&mut self, command: Command) -> Result<(), CoreError> {
        self.selection = apply(&self.catalog, &self.selection, command)?;
        Ok(())
    }

    /// Abandons the pending selections.
    pub fn cancel(&mut self) {
        self.selection.reset();
    }

    /// Validates the pending selections and hands the booking off.
    ///
    /// The notification center is called at most once. Its failures are
    /// passed through unchanged and never retried.
    ///
    /// # Arguments
    ///
    /// * `today` - The current calendar day in the patient's local zone
    /// * `center` - Where the finalized booking is sent
    ///
    /// # Returns
    ///
    /// * `Ok(SubmissionReceipt)` after the center accepted the booking; the
    ///   selections are reset
    /// * `Err(CoreError)` otherwise; the selections are kept
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selections violate booking rules (`CoreError::Validation`)
    /// - The notification center refused the booking (`CoreError::SubmissionFailed`)
    pub fn submit<N>(
        &mut self,
        today: CalendarDate,
        center: &mut N,
    ) -> Result<SubmissionReceipt, CoreError>
    where
        N: NotificationCenter + ?Sized,
    {
        let receipt: SubmissionReceipt = submit_selection(&self.selection, today, center)?;
        self.selection.reset();
        Ok(receipt)
    }
}
