// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Keyword search over labeled records.
//!
//! Product, review and provider lists all share one matching rule: a
//! record is kept when any of its text fields contains the query,
//! ignoring case. An empty query keeps everything.

use crate::types::{Category, Provider};

/// A record that exposes text fields for keyword search.
pub trait Searchable {
    /// Returns the fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Provider {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.display_name(), self.specialty()]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.display_name()]
    }
}

/// Filters records by case-insensitive substring match.
///
/// # Arguments
///
/// * `records` - The records to search
/// * `query` - The search text; empty keeps every record
/// * `fields_of` - Extracts the searchable fields of a record
///
/// # Returns
///
/// The matching records, in their original order.
pub fn filter<'a, R, F, I, S>(records: &'a [R], query: &str, fields_of: F) -> Vec<&'a R>
where
    F: Fn(&'a R) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle: String = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields_of(*record)
                .into_iter()
                .any(|field| field.as_ref().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filters [`Searchable`] records by their own search fields.
pub fn filter_records<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<&'a R> {
    filter(records, query, |record: &'a R| record.search_fields())
}
