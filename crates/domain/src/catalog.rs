// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data a booking session chooses from.

use crate::error::DomainError;
use crate::types::{Category, Provider, TimeSlot};
use std::collections::HashSet;

/// The immutable catalogs of providers, categories and time slots.
///
/// Entries keep the order they were supplied in so front ends can list
/// them as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    providers: Vec<Provider>,
    categories: Vec<Category>,
    time_slots: Vec<TimeSlot>,
}

impl Catalog {
    /// Creates a new `Catalog`.
    ///
    /// # Arguments
    ///
    /// * `providers` - The bookable providers
    /// * `categories` - The appointment categories
    /// * `time_slots` - The ordered time slot labels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two providers share an id
    /// - Two categories share an id
    /// - Two time slots share a label
    pub fn new(
        providers: Vec<Provider>,
        categories: Vec<Category>,
        time_slots: Vec<TimeSlot>,
    ) -> Result<Self, DomainError> {
        let mut provider_ids: HashSet<u32> = HashSet::new();
        for provider in &providers {
            if !provider_ids.insert(provider.id()) {
                return Err(DomainError::DuplicateProvider(provider.id()));
            }
        }

        let mut category_ids: HashSet<u32> = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(DomainError::DuplicateCategory(category.id()));
            }
        }

        let mut labels: HashSet<&str> = HashSet::new();
        for slot in &time_slots {
            if !labels.insert(slot.label()) {
                return Err(DomainError::DuplicateTimeSlot(slot.label().to_string()));
            }
        }

        Ok(Self {
            providers,
            categories,
            time_slots,
        })
    }

    /// Returns all providers in catalog order.
    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Returns all categories in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all time slots in catalog order.
    #[must_use]
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Looks up a provider by id.
    #[must_use]
    pub fn provider(&self, id: u32) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Looks up a time slot by its exact label.
    #[must_use]
    pub fn time_slot(&self, label: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|t| t.label() == label)
    }
}
