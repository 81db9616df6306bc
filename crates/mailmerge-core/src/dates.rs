//! Date and time formatting for rendered documents.
//!
//! Dates use the short month/day/year form without zero padding (`10/7/2026`);
//! timestamps append a 12-hour clock (`10/7/2026, 3:04:05 PM`).

use chrono::{NaiveDate, NaiveDateTime};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
