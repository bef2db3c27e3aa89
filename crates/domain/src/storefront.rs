// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Product catalog and patient reviews.

use crate::calendar::CalendarDate;
use crate::error::DomainError;
use crate::search::Searchable;
use crate::validation::validate_review_draft;
use serde::{Deserialize, Serialize};

/// A skincare product sold by the clinic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The product identifier.
    pub id: String,
    /// The product name.
    pub name: String,
    /// The product category, e.g. "Serum".
    pub category: String,
    /// The price in cents.
    pub price_cents: u32,
}

impl Product {
    /// Creates a new `Product`.
    #[must_use]
    pub fn new(id: &str, name: &str, category: &str, price_cents: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            price_cents,
        }
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.category]
    }
}

/// A submitted patient review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: String,
    rating: u8,
    comment: String,
    service: String,
    date: CalendarDate,
}

impl Review {
    /// Creates a new `Review`.
    ///
    /// # Arguments
    ///
    /// * `id` - The review identifier
    /// * `rating` - The star rating (1-5)
    /// * `comment` - The review text
    /// * `service` - The service being reviewed
    /// * `date` - The day the review was written
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReview` under the same rules as
    /// [`validate_review_draft`].
    pub fn new(
        id: &str,
        rating: u8,
        comment: &str,
        service: &str,
        date: CalendarDate,
    ) -> Result<Self, DomainError> {
        ReviewDraft::new(rating, comment, service).into_review(id, date)
    }

    /// Returns the review identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the star rating.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    /// Returns the review text.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the reviewed service.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Returns the day the review was written.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Searchable for Review {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.service, &self.comment]
    }
}

/// The contents of the feedback form before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Star rating; 0 means none chosen yet.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// The service being reviewed; empty means none chosen yet.
    pub service: String,
}

impl ReviewDraft {
    /// Creates a new `ReviewDraft`.
    #[must_use]
    pub fn new(rating: u8, comment: &str, service: &str) -> Self {
        Self {
            rating,
            comment: comment.to_string(),
            service: service.to_string(),
        }
    }

    /// Validates the draft and turns it into a [`Review`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReview` if the draft is incomplete.
    pub fn into_review(self, id: &str, date: CalendarDate) -> Result<Review, DomainError> {
        validate_review_draft(&self)?;
        Ok(Review {
            id: id.to_string(),
            rating: self.rating,
            comment: self.comment,
            service: self.service,
            date,
        })
    }
}

/// Exact-match criteria for the review list.
///
/// Unset criteria match every review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Only keep reviews of this service.
    pub service: Option<String>,
    /// Only keep reviews written on this day.
    pub date: Option<CalendarDate>,
}

impl ReviewFilter {
    /// Returns true if the review satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, review: &Review) -> bool {
        self.service
            .as_deref()
            .is_none_or(|service| review.service == service)
            && self.date.is_none_or(|date| review.date == date)
    }
}

/// Applies a [`ReviewFilter`], preserving order.
///
/// Accepts a review slice or the output of an earlier search.
#[must_use]
pub fn filter_reviews<'a, I>(reviews: I, filter: &ReviewFilter) -> Vec<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
{
    reviews
        .into_iter()
        .filter(|review| filter.matches(review))
        .collect()
}
