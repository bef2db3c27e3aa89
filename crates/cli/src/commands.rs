// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ClinicData;
use clinic_booking::{BookingSession, Command, CoreError, SubmissionReceipt};
use clinic_booking_dispatch::InMemoryNotificationCenter;
use clinic_booking_domain::{
    CalendarDate, DomainError, Product, Review, ReviewDraft, ReviewFilter, filter_records,
    filter_reviews,
};
use color_eyre::Result;
use std::io::Write;
use tracing::{info, warn};

/// Selections for a single booking.
///
/// Every flag is optional so that an incomplete request reaches the
/// validator and reports all missing selections at once.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BookArgs {
    /// Appointment date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<CalendarDate>,

    /// Provider id (see `catalog`)
    #[arg(long)]
    pub provider: Option<u32>,

    /// Appointment type id (see `catalog`)
    #[arg(long)]
    pub category: Option<u32>,

    /// Time slot label, e.g. "2:00 PM"
    #[arg(long)]
    pub time: Option<String>,
}

impl BookArgs {
    /// Converts the given flags into selection commands.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = Vec::new();
        if let Some(date) = self.date {
            commands.push(Command::SelectDate { date });
        }
        if let Some(provider_id) = self.provider {
            commands.push(Command::SelectProvider { provider_id });
        }
        if let Some(category_id) = self.category {
            commands.push(Command::SelectCategory { category_id });
        }
        if let Some(label) = &self.time {
            commands.push(Command::SelectTime {
                label: label.clone(),
            });
        }
        commands
    }
}

/// How a booking attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The notification center accepted the booking.
    Confirmed,
    /// The selections did not form a valid booking.
    Rejected,
}

/// Runs one booking session against an in-memory notification center.
///
/// # Arguments
///
/// * `data` - The reference data to select from
/// * `args` - The requested selections
/// * `today` - The current calendar day
/// * `out` - Where the summary and result are written
///
/// # Errors
///
/// Returns an error if a selection references an unknown catalog entry,
/// the notification center fails, or writing the output fails.
pub fn book<W: Write>(
    data: &ClinicData,
    args: &BookArgs,
    today: CalendarDate,
    out: &mut W,
) -> Result<BookingOutcome> {
    let mut session: BookingSession = BookingSession::new(data.catalog.clone());
    for command in args.commands() {
        session.execute(command)?;
    }

    writeln!(out, "Appointment summary")?;
    writeln!(out, "{}", session.snapshot())?;
    writeln!(out)?;

    let mut center: InMemoryNotificationCenter = InMemoryNotificationCenter::new(today);
    match session.submit(today, &mut center) {
        Ok(receipt) => {
            print_receipt(&receipt, &center, out)?;
            Ok(BookingOutcome::Confirmed)
        }
        Err(CoreError::Validation(errors)) => {
            warn!(violations = errors.len(), "Booking rejected");
            writeln!(out, "Cannot confirm booking:")?;
            for error in &errors {
                writeln!(out, "  - {error}")?;
            }
            Ok(BookingOutcome::Rejected)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_receipt<W: Write>(
    receipt: &SubmissionReceipt,
    center: &InMemoryNotificationCenter,
    out: &mut W,
) -> Result<()> {
    info!(
        confirmation_id = %receipt.confirmation_id,
        "Booking confirmed"
    );
    writeln!(out, "Booked: {}", receipt.booking)?;
    writeln!(out, "Confirmation: {}", receipt.confirmation_id)?;
    for notification in center.notifications() {
        writeln!(
            out,
            "[{}] {} {}: {}",
            notification.id, notification.date, notification.title, notification.message
        )?;
    }
    Ok(())
}

/// Lists providers, appointment types and time slots.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn list_catalog<W: Write>(data: &ClinicData, out: &mut W) -> Result<()> {
    writeln!(out, "Providers:")?;
    for provider in data.catalog.providers() {
        writeln!(
            out,
            "  {}  {} ({})",
            provider.id(),
            provider.display_name(),
            provider.specialty()
        )?;
    }

    writeln!(out, "Appointment types:")?;
    for category in data.catalog.categories() {
        writeln!(out, "  {}  {}", category.id(), category.display_name())?;
    }

    writeln!(out, "Time slots:")?;
    for slot in data.catalog.time_slots() {
        writeln!(out, "  {slot}")?;
    }
    Ok(())
}

/// Prints the products matching a keyword query.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn search_products<W: Write>(data: &ClinicData, query: &str, out: &mut W) -> Result<()> {
    let matches: Vec<&Product> = filter_records(&data.products, query);
    if matches.is_empty() {
        writeln!(out, "No products match '{query}'")?;
        return Ok(());
    }

    for product in matches {
        writeln!(
            out,
            "  {}  {} [{}] {}",
            product.id,
            product.name,
            product.category,
            format_price(product.price_cents)
        )?;
    }
    Ok(())
}

/// Prints the reviews matching a keyword query and exact-match criteria.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn search_reviews<W: Write>(
    data: &ClinicData,
    query: &str,
    criteria: &ReviewFilter,
    out: &mut W,
) -> Result<()> {
    let matches: Vec<&Review> = filter_reviews(filter_records(&data.reviews, query), criteria);
    if matches.is_empty() {
        writeln!(out, "No reviews found")?;
        return Ok(());
    }
    print_reviews(matches, out)
}

fn print_reviews<'a, I, W>(reviews: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = &'a Review>,
    W: Write,
{
    for review in reviews {
        writeln!(
            out,
            "  {}/5  {}  {}: {}",
            review.rating(),
            review.date(),
            review.service(),
            review.comment()
        )?;
    }
    Ok(())
}

/// A patient review to submit.
///
/// Missing values are left at their empty defaults so the review rules
/// report them.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FeedbackArgs {
    /// Star rating from 1 to 5
    #[arg(long, default_value_t = 0)]
    pub rating: u8,

    /// What the patient has to say
    #[arg(long, default_value = "")]
    pub comment: String,

    /// The service being reviewed, e.g. "Consultation"
    #[arg(long, default_value = "")]
    pub service: String,
}

/// How a feedback submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The review was accepted and listed.
    Accepted,
    /// The draft broke a review rule.
    Rejected,
}

/// Validates a review draft and shows it at the top of the review list.
///
/// The review is dated `today` and numbered after the existing reviews.
/// It only lives for this run.
///
/// # Errors
///
/// Returns an error if writing the output fails.
pub fn submit_feedback<W: Write>(
    data: &ClinicData,
    args: &FeedbackArgs,
    today: CalendarDate,
    out: &mut W,
) -> Result<FeedbackOutcome> {
    let draft: ReviewDraft = ReviewDraft::new(args.rating, &args.comment, &args.service);
    let id: String = (data.reviews.len() + 1).to_string();

    match draft.into_review(&id, today) {
        Ok(review) => {
            info!(review_id = %id, service = %review.service(), "Feedback accepted");
            writeln!(out, "Thank you for your feedback!")?;
            print_reviews(std::iter::once(&review).chain(&data.reviews), out)?;
            Ok(FeedbackOutcome::Accepted)
        }
        Err(DomainError::InvalidReview(reason)) => {
            warn!(%reason, "Feedback rejected");
            writeln!(out, "Cannot submit feedback: {reason}")?;
            Ok(FeedbackOutcome::Rejected)
        }
        Err(err) => Err(err.into()),
    }
}

/// Formats a price in cents as dollars.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
