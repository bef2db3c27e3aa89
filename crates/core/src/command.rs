// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clinic_booking_domain::CalendarDate;

/// A command represents a patient's selection as data only.
///
/// Providers, categories and time slots are referenced by their catalog
/// keys and resolved when the command is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the appointment date.
    SelectDate {
        /// The chosen calendar day.
        date: CalendarDate,
    },
    /// Choose a provider.
    SelectProvider {
        /// The provider's catalog id.
        provider_id: u32,
    },
    /// Choose an appointment category.
    SelectCategory {
        /// The category's catalog id.
        category_id: u32,
    },
    /// Choose a time slot.
    SelectTime {
        /// The slot's catalog label.
        label: String,
    },
    /// Clear every selection.
    Reset,
}
