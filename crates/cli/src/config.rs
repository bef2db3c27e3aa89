// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data loading.
//!
//! The catalog file is plain JSON. Its entries are read into transfer
//! structs first and only then turned into domain values, so every
//! provider, category, time slot and review goes through the same checks
//! as values built in code.

use chrono::{Local, NaiveDate};
use clinic_booking_domain::{
    CalendarDate, Catalog, Category, DomainError, Product, Provider, Review, TimeSlot,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file '{}': {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The catalog file is not valid catalog JSON.
    #[error("Failed to parse catalog file '{}': {source}", .path.display())]
    Json {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },
    /// The catalog entries violate a domain rule.
    #[error("Invalid catalog: {0}")]
    Domain(#[from] DomainError),
}

/// A provider entry as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderEntry {
    /// The provider identifier.
    pub id: u32,
    /// The name shown to patients.
    pub display_name: String,
    /// The provider's specialty.
    pub specialty: String,
}

/// A category entry as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryEntry {
    /// The category identifier.
    pub id: u32,
    /// The name shown to patients.
    pub display_name: String,
    /// The icon token used by front ends.
    pub icon_token: String,
}

/// A review entry as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReviewEntry {
    /// The review identifier.
    pub id: String,
    /// The star rating (1-5).
    pub rating: u8,
    /// The review text.
    pub comment: String,
    /// The service being reviewed.
    pub service: String,
    /// The day the review was written.
    pub date: CalendarDate,
}

/// The on-disk catalog format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogFile {
    /// Providers patients can book with.
    pub providers: Vec<ProviderEntry>,
    /// Appointment types.
    pub categories: Vec<CategoryEntry>,
    /// Bookable time-of-day labels, in display order.
    pub time_slots: Vec<String>,
    /// Products for the storefront search.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Published patient reviews.
    #[serde(default)]
    pub reviews: Vec<ReviewEntry>,
}

/// Validated reference data the commands run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicData {
    /// The booking catalog.
    pub catalog: Catalog,
    /// Storefront products.
    pub products: Vec<Product>,
    /// Published patient reviews.
    pub reviews: Vec<Review>,
}

impl TryFrom<CatalogFile> for ClinicData {
    type Error = DomainError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        let providers: Vec<Provider> = file
            .providers
            .iter()
            .map(|entry| Provider::new(entry.id, &entry.display_name, &entry.specialty))
            .collect::<Result<_, _>>()?;
        let categories: Vec<Category> = file
            .categories
            .iter()
            .map(|entry| Category::new(entry.id, &entry.display_name, &entry.icon_token))
            .collect::<Result<_, _>>()?;
        let time_slots: Vec<TimeSlot> = file
            .time_slots
            .iter()
            .map(|label| TimeSlot::new(label))
            .collect::<Result<_, _>>()?;
        let reviews: Vec<Review> = file
            .reviews
            .iter()
            .map(|entry| {
                Review::new(
                    &entry.id,
                    entry.rating,
                    &entry.comment,
                    &entry.service,
                    entry.date,
                )
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            catalog: Catalog::new(providers, categories, time_slots)?,
            products: file.products,
            reviews,
        })
    }
}

/// Loads reference data from a catalog file, or the built-in clinic data.
///
/// # Arguments
///
/// * `path` - The catalog file to read; `None` selects the built-in data
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid catalog JSON
/// - The entries violate a domain rule (e.g. a duplicate provider id)
pub fn load_clinic_data(path: Option<&Path>) -> Result<ClinicData, ConfigError> {
    let file: CatalogFile = match path {
        Some(path) => read_catalog_file(path)?,
        None => builtin_catalog_file()?,
    };
    Ok(ClinicData::try_from(file)?)
}

/// Reads and parses a catalog file without validating its entries.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_catalog_file(path: &Path) -> Result<CatalogFile, ConfigError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the current calendar day in the local time zone.
///
/// # Errors
///
/// Returns an error if the local date is outside the supported calendar range.
pub fn local_today() -> Result<CalendarDate, DomainError> {
    let today: NaiveDate = Local::now().date_naive();
    CalendarDate::parse(&today.format("%Y-%m-%d").to_string())
}

/// The clinic's own reference data.
///
/// # Errors
///
/// Returns an error if a seed date is not a real calendar day.
pub fn builtin_catalog_file() -> Result<CatalogFile, DomainError> {
    let provider = |id: u32, display_name: &str, specialty: &str| ProviderEntry {
        id,
        display_name: display_name.to_string(),
        specialty: specialty.to_string(),
    };
    let category = |id: u32, display_name: &str, icon_token: &str| CategoryEntry {
        id,
        display_name: display_name.to_string(),
        icon_token: icon_token.to_string(),
    };
    let review = |id: &str, rating: u8, comment: &str, service: &str, date: CalendarDate| {
        ReviewEntry {
            id: id.to_string(),
            rating,
            comment: comment.to_string(),
            service: service.to_string(),
            date,
        }
    };

    Ok(CatalogFile {
        providers: vec![
            provider(1, "Dr. Smith", "Dermatology"),
            provider(2, "Dr. Johnson", "Cosmetic Dermatology"),
            provider(3, "Dr. Williams", "Pediatric Dermatology"),
        ],
        categories: vec![
            category(1, "In-person Consultation", "medical-outline"),
            category(2, "Virtual Consultation", "videocam-outline"),
        ],
        time_slots: ["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"]
            .iter()
            .map(ToString::to_string)
            .collect(),
        products: vec![
            Product::new("1", "Advanced Hydrating Serum", "Serum", 4999),
            Product::new("2", "Anti-Aging Night Cream", "Moisturizer", 3999),
            Product::new("3", "Gentle Foaming Cleanser", "Cleanser", 2499),
            Product::new("4", "Vitamin C Brightening Mask", "Mask", 3499),
        ],
        reviews: vec![
            review(
                "1",
                5,
                "Great service!",
                "Consultation",
                CalendarDate::from_ymd(2023, 4, 15)?,
            ),
            review(
                "2",
                4,
                "Good experience overall.",
                "Treatment",
                CalendarDate::from_ymd(2023, 4, 10)?,
            ),
        ],
    })
}
