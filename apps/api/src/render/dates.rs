//! Date display for experience, education and custom items.
//!
//! Dates arrive as free-form strings. ISO months and days are shortened to
//! `Mon YYYY`; anything else is passed through as typed.

use std::borrow::Cow;

use chrono::NaiveDate;

use crate::models::profile::non_blank;

pub const PRESENT: &str = "Present";

/// `1842-01` / `1842-01-15` → `Jan 1842`. Unparseable input is returned trimmed.
pub fn format_date(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    match parse_iso(trimmed) {
        Some(date) => Cow::Owned(date.format("%b %Y").to_string()),
        None => Cow::Borrowed(trimmed),
    }
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
}

/// Joins a start and end date. An open end after a known start, or `current`,
/// reads as "Present". Returns `None` when there is nothing to show.
pub fn format_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = non_blank(start).map(format_date);
    let end = if current {
        Some(Cow::Borrowed(PRESENT))
    } else {
        non_blank(end).map(format_date)
    };

    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(start), None) => Some(format!("{start} - {PRESENT}")),
        (None, Some(end)) => Some(end.into_owned()),
        (None, None) => None,
    }
}
