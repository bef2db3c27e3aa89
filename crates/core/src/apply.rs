// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use clinic_booking_domain::{Catalog, Category, DomainError, Provider, SelectionSet, TimeSlot};

/// Applies a selection command, producing a new selection set.
///
/// Catalog references are resolved here; nothing else is checked. In
/// particular a past date is accepted and only rejected when the booking
/// is validated, so the front end can still display it.
///
/// # Arguments
///
/// * `catalog` - The reference data to resolve ids and labels against
/// * `selection` - The current selections (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(SelectionSet)` containing the updated selections
/// * `Err(CoreError)` if the command references unknown catalog entries
///
/// # Errors
///
/// Returns an error if:
/// - The provider id is not in the catalog
/// - The category id is not in the catalog
/// - The time slot label is not in the catalog
pub fn apply(
    catalog: &Catalog,
    selection: &SelectionSet,
    command: Command,
) -> Result<SelectionSet, CoreError> {
    let mut new_selection: SelectionSet = selection.clone();

    match command {
        Command::SelectDate { date } => new_selection.set_date(date),
        Command::SelectProvider { provider_id } => {
            let provider: &Provider = catalog
                .provider(provider_id)
                .ok_or(DomainError::ProviderNotFound(provider_id))?;
            new_selection.set_provider(provider.clone());
        }
        Command::SelectCategory { category_id } => {
            let category: &Category = catalog
                .category(category_id)
                .ok_or(DomainError::CategoryNotFound(category_id))?;
            new_selection.set_category(category.clone());
        }
        Command::SelectTime { label } => {
            let time: &TimeSlot = catalog
                .time_slot(&label)
                .ok_or_else(|| DomainError::TimeSlotNotFound(label.clone()))?;
            new_selection.set_time(time.clone());
        }
        Command::Reset => new_selection.reset(),
    }

    Ok(new_selection)
}
