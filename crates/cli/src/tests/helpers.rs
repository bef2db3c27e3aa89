// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::{ClinicData, load_clinic_data};
use clinic_booking_domain::CalendarDate;
use std::io::Write;
use tempfile::NamedTempFile;

/// Creates the built-in clinic data.
pub fn create_test_data() -> ClinicData {
    load_clinic_data(None).unwrap()
}

/// Creates a fixed "today" for booking tests.
pub fn create_test_today() -> CalendarDate {
    CalendarDate::parse("2026-03-10").unwrap()
}

/// Writes `contents` to a temporary JSON file that is removed on drop.
pub fn create_temp_catalog(contents: &str) -> NamedTempFile {
    let mut file: NamedTempFile = tempfile::Builder::new()
        .prefix("clinic-booking-")
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Runs `f` against an in-memory buffer and returns what it wrote.
pub fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>),
{
    let mut buffer: Vec<u8> = Vec::new();
    f(&mut buffer);
    String::from_utf8(buffer).unwrap()
}
