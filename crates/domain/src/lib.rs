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

mod booking;
mod calendar;
mod catalog;
mod error;
mod search;
mod selection;
mod storefront;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use booking::Booking;
pub use calendar::{CalendarDate, is_selectable, is_selectable_str};
pub use catalog::Catalog;
pub use error::DomainError;
pub use search::{Searchable, filter, filter_records};
pub use selection::{SelectionSet, SelectionSnapshot};
pub use storefront::{Product, Review, ReviewDraft, ReviewFilter, filter_reviews};
pub use types::{Category, Provider, TimeSlot};
pub use validation::{ValidationError, ValidationErrors, validate_booking, validate_review_draft};
