// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarDate, Category, Provider, SelectionSet, TimeSlot};

pub fn create_test_today() -> CalendarDate {
    CalendarDate::parse("2026-03-10").unwrap()
}

pub fn create_test_provider() -> Provider {
    Provider::new(1, "Dr. Smith", "Dermatology").unwrap()
}

pub fn create_test_category() -> Category {
    Category::new(1, "In-person Consultation", "medical-outline").unwrap()
}

pub fn create_test_time() -> TimeSlot {
    TimeSlot::new("2:00 PM").unwrap()
}

/// A selection with every field set and a date one day after the test "today".
pub fn create_complete_selection() -> SelectionSet {
    let mut selection: SelectionSet = SelectionSet::new();
    selection.set_date(create_test_today().add_days(1).unwrap());
    selection.set_provider(create_test_provider());
    selection.set_category(create_test_category());
    selection.set_time(create_test_time());
    selection
}
