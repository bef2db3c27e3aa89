// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::Serialize;

/// A clinician a patient can book with.
///
/// Providers are immutable reference data loaded once per application run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Provider {
    /// The unique identifier (at least 1).
    id: u32,
    /// The name shown to patients.
    display_name: String,
    /// The provider's specialty (may be empty).
    specialty: String,
}

impl Provider {
    /// Creates a new `Provider`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier (must be at least 1)
    /// * `display_name` - The name shown to patients (must not be empty)
    /// * `specialty` - The provider's specialty
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidProvider` if the id is 0 or the name is blank.
    pub fn new(id: u32, display_name: &str, specialty: &str) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidProvider(String::from(
                "Provider id must be at least 1",
            )));
        }
        if display_name.trim().is_empty() {
            return Err(DomainError::InvalidProvider(String::from(
                "Provider name cannot be empty",
            )));
        }

        Ok(Self {
            id,
            display_name: display_name.to_string(),
            specialty: specialty.to_string(),
        })
    }

    /// Returns the provider identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the specialty.
    #[must_use]
    pub fn specialty(&self) -> &str {
        &self.specialty
    }
}

/// An appointment type, such as an in-person or virtual consultation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// The unique identifier (at least 1).
    id: u32,
    /// The name shown to patients.
    display_name: String,
    /// Icon hint for the front end.
    icon_token: String,
}

impl Category {
    /// Creates a new `Category`.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier (must be at least 1)
    /// * `display_name` - The name shown to patients (must not be empty)
    /// * `icon_token` - Icon hint for the front end
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the id is 0 or the name is blank.
    pub fn new(id: u32, display_name: &str, icon_token: &str) -> Result<Self, DomainError> {
        if id == 0 {
            return Err(DomainError::InvalidCategory(String::from(
                "Category id must be at least 1",
            )));
        }
        if display_name.trim().is_empty() {
            return Err(DomainError::InvalidCategory(String::from(
                "Category name cannot be empty",
            )));
        }

        Ok(Self {
            id,
            display_name: display_name.to_string(),
            icon_token: icon_token.to_string(),
        })
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the icon token.
    #[must_use]
    pub fn icon_token(&self) -> &str {
        &self.icon_token
    }
}

/// A bookable time of day, e.g. "9:00 AM".
///
/// Labels are opaque: two slots are the same slot only if their labels are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeSlot {
    label: String,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the label is blank.
    pub fn new(label: &str) -> Result<Self, DomainError> {
        if label.trim().is_empty() {
            return Err(DomainError::InvalidTimeSlot(String::from(
                "Time slot label cannot be empty",
            )));
        }
        Ok(Self {
            label: label.to_string(),
        })
    }

    /// Returns the slot label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
