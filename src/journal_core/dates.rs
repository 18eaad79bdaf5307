//! Conversion between the stored and the displayed form of a calendar date.
//!
//! Dates are stored as `YYYY-MM-DD` strings and only converted to the
//! `DD.MM.YYYY` display form at the render/export boundary. No timezone
//! conversion happens anywhere: a date is a calendar date, not an instant.

use crate::constants::{DATE_FORMAT_COMPACT, DATE_FORMAT_ISO, DISPLAY_DATE_SEPARATOR};
use chrono::{Local, NaiveDate};

/// Converts a stored `YYYY-MM-DD` date into `DD.MM.YYYY`.
///
/// Segments are moved, never renumbered, so zero padding survives verbatim.
/// Input that does not have exactly three `-`-separated segments is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use diarium::journal_core::dates::to_display;
///
/// assert_eq!(to_display("2024-03-07"), "07.03.2024");
/// ```
pub fn to_display(date: &str) -> String {
    let segments: Vec<&str> = date.split('-').collect();
    match segments.as_slice() {
        [year, month, day] => [*day, *month, *year].join(DISPLAY_DATE_SEPARATOR),
        _ => date.to_string(),
    }
}

/// Converts a `DD.MM.YYYY` display date back into the stored `YYYY-MM-DD` form.
///
/// Returns `None` when the input does not have three `.`-separated segments.
pub fn from_display(display: &str) -> Option<String> {
    let segments: Vec<&str> = display.split(DISPLAY_DATE_SEPARATOR).collect();
    match segments.as_slice() {
        [day, month, year] => Some(format!("{}-{}-{}", year, month, day)),
        _ => None,
    }
}

/// Returns today's local date in `YYYY-MM-DD` form.
pub fn today() -> String {
    format_iso(Local::now().date_naive())
}

/// Formats a date in the stored `YYYY-MM-DD` form.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(DATE_FORMAT_ISO).to_string()
}

/// Parses a date entered by the user and normalizes it to `YYYY-MM-DD`.
///
/// Both `YYYY-MM-DD` and the compact `YYYYMMDD` form are accepted.
pub fn normalize(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(raw, DATE_FORMAT_COMPACT))
        .ok()
        .map(format_iso)
}
