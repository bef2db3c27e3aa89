// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConfirmationId, DispatchError, NotificationCenter};
use clinic_booking_domain::{Booking, CalendarDate};
use serde::Serialize;
use tracing::debug;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// An upcoming appointment.
    Appointment,
    /// A medication reminder.
    Medication,
    /// A promotional offer.
    Offer,
}

/// An entry in the patient's notification inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// The notification identifier (the confirmation id for appointments).
    pub id: String,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Short heading.
    pub title: String,
    /// Body text.
    pub message: String,
    /// The day the notification was issued.
    pub date: CalendarDate,
    /// Whether the patient has opened it.
    pub read: bool,
}

/// A notification center that keeps everything in memory.
///
/// Each accepted booking receives a sequential confirmation id of the form
/// `APT-000001` and an unread "Upcoming Appointment" notification. An
/// optional capacity makes the center refuse further bookings with
/// `DispatchError::Unavailable` once it has accepted that many.
#[derive(Debug, Clone)]
pub struct InMemoryNotificationCenter {
    today: CalendarDate,
    bookings: Vec<(ConfirmationId, Booking)>,
    notifications: Vec<Notification>,
    capacity: Option<usize>,
}

impl InMemoryNotificationCenter {
    /// Creates an empty center with no capacity limit.
    ///
    /// Notifications it issues are dated `today`.
    #[must_use]
    pub const fn new(today: CalendarDate) -> Self {
        Self {
            today,
            bookings: Vec::new(),
            notifications: Vec::new(),
            capacity: None,
        }
    }

    /// Creates an empty center that accepts at most `capacity` bookings.
    #[must_use]
    pub const fn with_capacity_limit(today: CalendarDate, capacity: usize) -> Self {
        Self {
            today,
            bookings: Vec::new(),
            notifications: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Returns accepted bookings with their confirmation ids, oldest first.
    #[must_use]
    pub fn bookings(&self) -> &[(ConfirmationId, Booking)] {
        &self.bookings
    }

    /// Returns the inbox, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Returns the number of notifications not yet read.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Adds a notification that did not come from a booking (offers, reminders).
    pub fn push(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// Marks a notification as read.
    ///
    /// Returns `false` if no notification has the given id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    fn next_confirmation_id(&self) -> ConfirmationId {
        ConfirmationId::new(format!("APT-{:06}", self.bookings.len() + 1))
    }
}

impl NotificationCenter for InMemoryNotificationCenter {
    fn submit(&mut self, booking: &Booking) -> Result<ConfirmationId, DispatchError> {
        if let Some(capacity) = self.capacity.filter(|&c| self.bookings.len() >= c) {
            debug!(capacity, "Notification center refused booking: capacity reached");
            return Err(DispatchError::Unavailable {
                reason: format!("no more than {capacity} bookings can be accepted"),
            });
        }

        let confirmation_id: ConfirmationId = self.next_confirmation_id();
        let message: String = format!(
            "Your {} with {} is booked for {} at {}.",
            booking.category().display_name(),
            booking.provider().display_name(),
            booking.date(),
            booking.time()
        );

        self.push(Notification {
            id: confirmation_id.to_string(),
            kind: NotificationKind::Appointment,
            title: String::from("Upcoming Appointment"),
            message,
            date: self.today,
            read: false,
        });
        self.bookings.push((confirmation_id.clone(), booking.clone()));

        debug!(
            confirmation_id = %confirmation_id,
            provider_id = booking.provider().id(),
            date = %booking.date(),
            "Recorded booking"
        );

        Ok(confirmation_id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use clinic_booking_domain::{
        CalendarDate, Category, Provider, SelectionSet, TimeSlot, validate_booking,
    };

    fn create_test_today() -> CalendarDate {
        CalendarDate::parse("2026-03-10").unwrap()
    }

    fn create_test_booking(day: &str) -> Booking {
        let mut selection: SelectionSet = SelectionSet::new();
        selection.set_date(CalendarDate::parse(day).unwrap());
        selection.set_provider(Provider::new(1, "Dr. Smith", "Dermatology").unwrap());
        selection.set_category(Category::new(2, "Virtual Consultation", "videocam").unwrap());
        selection.set_time(TimeSlot::new("2:00 PM").unwrap());
        validate_booking(&selection, create_test_today()).unwrap()
    }

    #[test]
    fn test_submit_issues_sequential_confirmation_ids() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::new(create_test_today());

        let first: ConfirmationId = center.submit(&create_test_booking("2026-03-11")).unwrap();
        let second: ConfirmationId = center.submit(&create_test_booking("2026-03-12")).unwrap();

        assert_eq!(first.as_str(), "APT-000001");
        assert_eq!(second.as_str(), "APT-000002");
        assert_eq!(center.bookings().len(), 2);
        assert_eq!(center.bookings()[1].0, second);
    }

    #[test]
    fn test_submit_adds_unread_appointment_notification() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::new(create_test_today());
        center.submit(&create_test_booking("2026-03-11")).unwrap();

        assert_eq!(center.unread_count(), 1);
        let notification: &Notification = &center.notifications()[0];
        assert_eq!(notification.id, "APT-000001");
        assert_eq!(notification.kind, NotificationKind::Appointment);
        assert_eq!(notification.title, "Upcoming Appointment");
        assert_eq!(
            notification.message,
            "Your Virtual Consultation with Dr. Smith is booked for 2026-03-11 at 2:00 PM."
        );
        assert_eq!(notification.date, create_test_today());
        assert!(!notification.read);
    }

    #[test]
    fn test_inbox_lists_newest_first() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::new(create_test_today());
        center.push(Notification {
            id: String::from("offer-1"),
            kind: NotificationKind::Offer,
            title: String::from("Special Offer"),
            message: String::from("20% off on all skincare products this week!"),
            date: create_test_today(),
            read: false,
        });
        center.submit(&create_test_booking("2026-03-11")).unwrap();

        let ids: Vec<&str> = center.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["APT-000001", "offer-1"]);
    }

    #[test]
    fn test_mark_read() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::new(create_test_today());
        center.submit(&create_test_booking("2026-03-11")).unwrap();
        center.submit(&create_test_booking("2026-03-12")).unwrap();

        assert!(center.mark_read("APT-000001"));
        assert_eq!(center.unread_count(), 1);
        assert!(!center.mark_read("APT-999999"));
        assert_eq!(center.unread_count(), 1);
    }

    #[test]
    fn test_capacity_limit_reports_unavailable() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::with_capacity_limit(create_test_today(), 1);
        center.submit(&create_test_booking("2026-03-11")).unwrap();

        let result: Result<ConfirmationId, DispatchError> =
            center.submit(&create_test_booking("2026-03-12"));

        assert!(matches!(result, Err(DispatchError::Unavailable { .. })));
        assert_eq!(center.bookings().len(), 1);
        assert_eq!(center.notifications().len(), 1);
    }

    #[test]
    fn test_zero_capacity_refuses_everything() {
        let mut center: InMemoryNotificationCenter =
            InMemoryNotificationCenter::with_capacity_limit(create_test_today(), 0);
        let result: Result<ConfirmationId, DispatchError> =
            center.submit(&create_test_booking("2026-03-11"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Notification center unavailable: no more than 0 bookings can be accepted"
        );
    }

    #[test]
    fn test_dispatch_error_display() {
        let err: DispatchError = DispatchError::Rejected {
            reason: String::from("slot taken"),
        };
        assert_eq!(err.to_string(), "Booking rejected: slot taken");
    }
}
