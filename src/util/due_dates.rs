//! Due-date parsing and overdue checks.
//!
//! Issue records carry due dates either as full RFC 3339 timestamps or as
//! bare `YYYY-MM-DD` dates; bare dates are read as midnight UTC.

#[cfg(test)]
#[path = "due_dates_test.rs"]
mod due_dates_test;

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::net::types::{IssueStatus, IssuedBook};

/// Parse a due date. Returns `None` for anything unrecognized.
pub fn parse_due_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// True if the loan is still out and its due date is strictly before `now`.
/// Unparseable due dates are never overdue.
pub fn is_overdue(issue: &IssuedBook, now: DateTime<Utc>) -> bool {
    issue.status == IssueStatus::NotReturned && parse_due_date(&issue.due_date).is_some_and(|due| due < now)
}

/// Display form of a due date (`YYYY-MM-DD`) as seen in `tz`, or the raw
/// text if unparseable.
pub fn format_due_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_due_date(raw).map_or_else(
        || raw.to_owned(),
        |d| d.with_timezone(tz).format("%Y-%m-%d").to_string(),
    )
}
