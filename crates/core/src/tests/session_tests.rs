// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    RefusingCenter, create_test_catalog, create_test_today, create_test_tomorrow,
};
use crate::{BookingSession, Command, CoreError, SubmissionReceipt, submit_selection};
use clinic_booking_dispatch::{DispatchError, InMemoryNotificationCenter};
use clinic_booking_domain::{CalendarDate, SelectionSet, ValidationError};

fn create_ready_session(date: CalendarDate) -> BookingSession {
    let mut session: BookingSession = BookingSession::new(create_test_catalog());
    session.execute(Command::SelectDate { date }).unwrap();
    session
        .execute(Command::SelectProvider { provider_id: 1 })
        .unwrap();
    session
        .execute(Command::SelectCategory { category_id: 2 })
        .unwrap();
    session
        .execute(Command::SelectTime {
            label: String::from("2:00 PM"),
        })
        .unwrap();
    session
}

#[test]
fn test_new_session_has_empty_selection() {
    let session: BookingSession = BookingSession::new(create_test_catalog());
    assert_eq!(session.selection(), &SelectionSet::new());
    assert_eq!(session.catalog().providers().len(), 3);
}

#[test]
fn test_submit_returns_receipt_and_resets() {
    let mut session: BookingSession = create_ready_session(create_test_tomorrow());
    let mut center: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());

    let receipt: SubmissionReceipt = session.submit(create_test_today(), &mut center).unwrap();

    assert_eq!(receipt.confirmation_id.as_str(), "APT-000001");
    assert_eq!(receipt.booking.date(), create_test_tomorrow());
    assert_eq!(receipt.booking.provider().display_name(), "Dr. Smith");
    assert_eq!(
        receipt.booking.category().display_name(),
        "Virtual Consultation"
    );
    assert_eq!(receipt.booking.time().label(), "2:00 PM");
    assert!(!session.selection().is_complete());
    assert_eq!(center.bookings().len(), 1);
    assert_eq!(center.bookings()[0].1, receipt.booking);
}

#[test]
fn test_submit_incomplete_selection_reports_validation_errors() {
    let mut session: BookingSession = BookingSession::new(create_test_catalog());
    session
        .execute(Command::SelectProvider { provider_id: 1 })
        .unwrap();
    let mut center: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());

    let result: Result<SubmissionReceipt, CoreError> =
        session.submit(create_test_today(), &mut center);

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert_eq!(
        errors.as_slice(),
        &[
            ValidationError::MissingDate,
            ValidationError::MissingCategory,
            ValidationError::MissingTime,
        ]
    );
    assert!(center.bookings().is_empty());
    assert!(session.selection().provider().is_some());
}

#[test]
fn test_submit_past_date_is_rejected_and_selection_kept() {
    let mut session: BookingSession =
        create_ready_session(CalendarDate::parse("2020-01-01").unwrap());
    let mut center: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());

    let result: Result<SubmissionReceipt, CoreError> =
        session.submit(create_test_today(), &mut center);

    let Err(CoreError::Validation(errors)) = result else {
        panic!("expected validation failure, got {result:?}");
    };
    assert_eq!(errors.as_slice(), &[ValidationError::PastDate]);
    assert!(session.selection().is_complete());
    assert!(center.notifications().is_empty());
}

#[test]
fn test_dispatch_failure_is_surfaced_without_retry() {
    let mut session: BookingSession = create_ready_session(create_test_tomorrow());
    let mut center: RefusingCenter = RefusingCenter::default();

    let result: Result<SubmissionReceipt, CoreError> =
        session.submit(create_test_today(), &mut center);

    assert_eq!(
        result,
        Err(CoreError::SubmissionFailed(DispatchError::Rejected {
            reason: String::from("clinic closed"),
        }))
    );
    assert_eq!(center.attempts, 1);
    assert!(session.selection().is_complete());
}

#[test]
fn test_resubmit_after_outage_succeeds() {
    let mut session: BookingSession = create_ready_session(create_test_tomorrow());
    let mut closed: InMemoryNotificationCenter =
        InMemoryNotificationCenter::with_capacity_limit(create_test_today(), 0);
    let mut open: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());

    let first: Result<SubmissionReceipt, CoreError> =
        session.submit(create_test_today(), &mut closed);
    assert!(matches!(
        first,
        Err(CoreError::SubmissionFailed(DispatchError::Unavailable { .. }))
    ));

    let second: SubmissionReceipt = session.submit(create_test_today(), &mut open).unwrap();
    assert_eq!(second.confirmation_id.as_str(), "APT-000001");
}

#[test]
fn test_failed_command_keeps_session_selection() {
    let mut session: BookingSession = create_ready_session(create_test_tomorrow());
    let before: SelectionSet = session.selection().clone();

    let result: Result<(), CoreError> =
        session.execute(Command::SelectCategory { category_id: 7 });

    assert!(result.is_err());
    assert_eq!(session.selection(), &before);
}

#[test]
fn test_cancel_clears_selection() {
    let mut session: BookingSession = create_ready_session(create_test_tomorrow());
    session.cancel();
    assert!(!session.selection().is_complete());
    assert_eq!(session.snapshot().date, None);
}

#[test]
fn test_snapshot_reflects_pending_selection() {
    let session: BookingSession = create_ready_session(create_test_tomorrow());
    assert_eq!(
        session.snapshot().to_string(),
        "Date: 2026-03-11\nTime: 2:00 PM\nProvider: Dr. Smith\nCategory: Virtual Consultation"
    );
}

#[test]
fn test_submit_selection_does_not_reset() {
    let session: BookingSession = create_ready_session(create_test_tomorrow());
    let mut center: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());

    let receipt: SubmissionReceipt =
        submit_selection(session.selection(), create_test_today(), &mut center).unwrap();

    assert_eq!(receipt.confirmation_id.as_str(), "APT-000001");
    assert!(session.selection().is_complete());
}

#[test]
fn test_core_error_display() {
    let mut session: BookingSession = BookingSession::new(create_test_catalog());
    let mut center: InMemoryNotificationCenter =
        InMemoryNotificationCenter::new(create_test_today());
    let err: CoreError = session
        .submit(create_test_today(), &mut center)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Booking incomplete: Please select a date; Please select a provider; Please select an appointment type; Please select a time"
    );

    let err: CoreError = CoreError::SubmissionFailed(DispatchError::Unavailable {
        reason: String::from("offline"),
    });
    assert_eq!(
        err.to_string(),
        "Submission failed: Notification center unavailable: offline"
    );
}
