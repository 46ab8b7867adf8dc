//! Figures derived from dashboard data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::net::api::DashboardData;
use crate::net::types::IssueStatus;
use crate::util::due_dates::{format_due_date, is_overdue};

/// How many pending returns the due-date list shows.
pub const DUE_LIST_LIMIT: usize = 5;
/// Titles longer than this are cut and suffixed with `...`.
pub const DUE_TITLE_MAX_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_books: usize,
    pub total_readers: usize,
    pub total_issued: usize,
    pub overdue: usize,
}

impl DashboardStats {
    pub fn compute(data: &DashboardData, now: DateTime<Utc>) -> Self {
        Self {
            total_books: data.books.len(),
            total_readers: data.readers.len(),
            total_issued: data.issued.len(),
            overdue: data.issued.iter().filter(|issue| is_overdue(issue, now)).count(),
        }
    }
}

/// One row of the due-date list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DueEntry {
    pub id: String,
    pub title: String,
    pub due: String,
    pub overdue: bool,
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > DUE_TITLE_MAX_CHARS {
        let cut: String = title.chars().take(DUE_TITLE_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        title.to_owned()
    }
}

/// First pending returns in server order, with due dates shown in the
/// timezone of `now`.
pub fn due_entries<Tz>(data: &DashboardData, now: DateTime<Tz>) -> Vec<DueEntry>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let tz = now.timezone();
    let now = now.with_timezone(&Utc);
    data.issued
        .iter()
        .filter(|issue| issue.status == IssueStatus::NotReturned)
        .take(DUE_LIST_LIMIT)
        .map(|issue| DueEntry {
            id: issue.id.clone(),
            title: truncate_title(issue.book_title()),
            due: format_due_date(&issue.due_date, &tz),
            overdue: is_overdue(issue, now),
        })
        .collect()
}
