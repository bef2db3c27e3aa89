// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CalendarDate;
use crate::types::{Category, Provider, TimeSlot};
use serde::Serialize;

/// A finalized appointment request.
///
/// A `Booking` can only be obtained from [`crate::validate_booking`], so
/// every value has all four fields populated and a date that was not in
/// the past when it was validated. It does not implement `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    date: CalendarDate,
    provider: Provider,
    category: Category,
    time: TimeSlot,
}

impl Booking {
    pub(crate) const fn new(
        date: CalendarDate,
        provider: Provider,
        category: Category,
        time: TimeSlot,
    ) -> Self {
        Self {
            date,
            provider,
            category,
            time,
        }
    }

    /// Returns the appointment date.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the booked provider.
    #[must_use]
    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Returns the appointment category.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the booked time slot.
    #[must_use]
    pub const fn time(&self) -> &TimeSlot {
        &self.time
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} with {} on {} at {}",
            self.category.display_name(),
            self.provider.display_name(),
            self.date,
            self.time
        )
    }
}
