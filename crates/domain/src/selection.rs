// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pending appointment selections.

use crate::calendar::CalendarDate;
use crate::types::{Category, Provider, TimeSlot};
use serde::Serialize;

/// Placeholder shown in summaries for a field that has not been chosen.
const NOT_SELECTED: &str = "Not selected";

/// The four selections a patient makes while booking.
///
/// Setters never validate. A partially filled set is a normal state while
/// the patient is still choosing; rules are applied by
/// [`crate::validate_booking`] when the booking is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    date: Option<CalendarDate>,
    provider: Option<Provider>,
    category: Option<Category>,
    time: Option<TimeSlot>,
}

impl SelectionSet {
    /// Creates a selection set with every field unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            date: None,
            provider: None,
            category: None,
            time: None,
        }
    }

    /// Sets the appointment date, replacing any earlier choice.
    pub fn set_date(&mut self, date: CalendarDate) {
        self.date = Some(date);
    }

    /// Sets the provider, replacing any earlier choice.
    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = Some(provider);
    }

    /// Sets the category, replacing any earlier choice.
    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    /// Sets the time slot, replacing any earlier choice.
    pub fn set_time(&mut self, time: TimeSlot) {
        self.time = Some(time);
    }

    /// Returns whether all four fields are populated.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.provider.is_some()
            && self.category.is_some()
            && self.time.is_some()
    }

    /// Clears all four fields.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a read-only copy of the current selections.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            date: self.date,
            provider: self.provider.clone(),
            category: self.category.clone(),
            time: self.time.clone(),
        }
    }

    /// Returns the selected date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    /// Returns the selected provider, if any.
    #[must_use]
    pub const fn provider(&self) -> Option<&Provider> {
        self.provider.as_ref()
    }

    /// Returns the selected category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Returns the selected time slot, if any.
    #[must_use]
    pub const fn time(&self) -> Option<&TimeSlot> {
        self.time.as_ref()
    }
}

/// A detached copy of a [`SelectionSet`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    /// The selected date.
    pub date: Option<CalendarDate>,
    /// The selected provider.
    pub provider: Option<Provider>,
    /// The selected category.
    pub category: Option<Category>,
    /// The selected time slot.
    pub time: Option<TimeSlot>,
}

impl std::fmt::Display for SelectionSnapshot {
    /// Renders the appointment summary, one field per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let date: String = self
            .date
            .map_or_else(|| NOT_SELECTED.to_string(), |d| d.to_string());
        let time: &str = self.time.as_ref().map_or(NOT_SELECTED, TimeSlot::label);
        let provider: &str = self
            .provider
            .as_ref()
            .map_or(NOT_SELECTED, Provider::display_name);
        let category: &str = self
            .category
            .as_ref()
            .map_or(NOT_SELECTED, Category::display_name);

        writeln!(f, "Date: {date}")?;
        writeln!(f, "Time: {time}")?;
        writeln!(f, "Provider: {provider}")?;
        write!(f, "Category: {category}")
    }
}
