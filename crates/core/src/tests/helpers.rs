// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clinic_booking_dispatch::{ConfirmationId, DispatchError, NotificationCenter};
use clinic_booking_domain::{Booking, CalendarDate, Catalog, Category, Provider, TimeSlot};

pub fn create_test_today() -> CalendarDate {
    CalendarDate::parse("2026-03-10").unwrap()
}

pub fn create_test_tomorrow() -> CalendarDate {
    create_test_today().add_days(1).unwrap()
}

pub fn create_test_catalog() -> Catalog {
    Catalog::new(
        vec![
            Provider::new(1, "Dr. Smith", "Dermatology").unwrap(),
            Provider::new(2, "Dr. Johnson", "Cosmetic Dermatology").unwrap(),
            Provider::new(3, "Dr. Williams", "Pediatric Dermatology").unwrap(),
        ],
        vec![
            Category::new(1, "In-person Consultation", "medical-outline").unwrap(),
            Category::new(2, "Virtual Consultation", "videocam-outline").unwrap(),
        ],
        ["9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM"]
            .into_iter()
            .map(|label| TimeSlot::new(label).unwrap())
            .collect(),
    )
    .unwrap()
}

/// A notification center that refuses every booking and counts attempts.
#[derive(Debug, Default)]
pub struct RefusingCenter {
    pub attempts: usize,
}

impl NotificationCenter for RefusingCenter {
    fn submit(&mut self, _booking: &Booking) -> Result<ConfirmationId, DispatchError> {
        self.attempts += 1;
        Err(DispatchError::Rejected {
            reason: String::from("clinic closed"),
        })
    }
}
