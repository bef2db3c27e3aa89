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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod config;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use clinic_booking_domain::{CalendarDate, ReviewFilter};
use color_eyre::Result;
use commands::{BookArgs, BookingOutcome, FeedbackArgs, FeedbackOutcome};
use config::ClinicData;
use std::io::StdoutLock;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Clinic Booking - select and confirm clinic appointments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON catalog file. If not provided, uses the built-in clinic catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Treat this day (YYYY-MM-DD) as today instead of the local calendar day
    #[arg(long, global = true)]
    today: Option<CalendarDate>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Clone, Subcommand)]
enum Action {
    /// Book an appointment and print the confirmation
    #[command(visible_alias = "b")]
    Book(BookArgs),

    /// List providers, appointment types and time slots
    #[command(visible_alias = "c")]
    Catalog,

    /// Search the product catalog
    #[command(visible_alias = "p")]
    Products {
        /// Keyword matched against product names and categories
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Search and filter patient reviews
    #[command(visible_alias = "r")]
    Reviews {
        /// Keyword matched against review services and comments
        #[arg(long, default_value = "")]
        query: String,

        /// Only show reviews of this service
        #[arg(long)]
        service: Option<String>,

        /// Only show reviews written on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<CalendarDate>,
    },

    /// Submit a review and show the updated review list
    #[command(visible_alias = "f")]
    Feedback(FeedbackArgs),
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// `RUST_LOG` wins over the verbosity flags when set.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(self.log_level().into()))
    }

    fn today(&self) -> Result<CalendarDate> {
        self.today
            .map_or_else(|| config::local_today().map_err(Into::into), Ok)
    }

    fn run(&self) -> Result<ExitCode> {
        let data: ClinicData = config::load_clinic_data(self.catalog.as_deref())?;
        let mut out: StdoutLock<'static> = std::io::stdout().lock();

        match &self.action {
            Action::Book(book_args) => {
                let today: CalendarDate = self.today()?;
                info!(%today, "Starting booking session");
                match commands::book(&data, book_args, today, &mut out)? {
                    BookingOutcome::Confirmed => Ok(ExitCode::SUCCESS),
                    BookingOutcome::Rejected => Ok(ExitCode::FAILURE),
                }
            }
            Action::Catalog => {
                commands::list_catalog(&data, &mut out)?;
                Ok(ExitCode::SUCCESS)
            }
            Action::Products { query } => {
                commands::search_products(&data, query, &mut out)?;
                Ok(ExitCode::SUCCESS)
            }
            Action::Reviews {
                query,
                service,
                date,
            } => {
                let criteria: ReviewFilter = ReviewFilter {
                    service: service.clone(),
                    date: *date,
                };
                commands::search_reviews(&data, query, &criteria, &mut out)?;
                Ok(ExitCode::SUCCESS)
            }
            Action::Feedback(feedback_args) => {
                let today: CalendarDate = self.today()?;
                match commands::submit_feedback(&data, feedback_args, today, &mut out)? {
                    FeedbackOutcome::Accepted => Ok(ExitCode::SUCCESS),
                    FeedbackOutcome::Rejected => Ok(ExitCode::FAILURE),
                }
            }
        }
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()
}
