use chrono::TimeZone;

use super::*;
use crate::net::types::{Book, BookSummary, IssuedBook, Reader};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn issue(id: &str, status: IssueStatus, due: &str, title: Option<&str>) -> IssuedBook {
    IssuedBook {
        id: id.to_owned(),
        status,
        due_date: due.to_owned(),
        book: title.map(|t| BookSummary { title: Some(t.to_owned()) }),
        reader: None,
    }
}

fn sample() -> DashboardData {
    DashboardData {
        books: vec![Book { title: "Dune".to_owned() }, Book { title: "Emma".to_owned() }],
        readers: vec![Reader { name: "Nimal".to_owned() }],
        issued: vec![
            issue("i1", IssueStatus::NotReturned, "2025-06-01", Some("Dune")),
            issue("i2", IssueStatus::Returned, "2025-06-01", Some("Emma")),
            issue("i3", IssueStatus::NotReturned, "2025-07-01", None),
        ],
    }
}

#[test]
fn stats_count_everything_and_only_pending_overdue() {
    let stats = DashboardStats::compute(&sample(), now());
    assert_eq!(
        stats,
        DashboardStats { total_books: 2, total_readers: 1, total_issued: 3, overdue: 1 }
    );
}

#[test]
fn empty_data_yields_zero_stats() {
    assert_eq!(DashboardStats::compute(&DashboardData::default(), now()), DashboardStats::default());
}

#[test]
fn due_entries_skip_returned_and_flag_overdue() {
    let entries = due_entries(&sample(), now());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "i1");
    assert!(entries[0].overdue);
    assert_eq!(entries[1].title, "Book");
    assert!(!entries[1].overdue);
    assert_eq!(entries[1].due, "2025-07-01");
}

#[test]
fn due_entries_are_capped() {
    let data = DashboardData {
        issued: (0..8)
            .map(|i| issue(&format!("i{i}"), IssueStatus::NotReturned, "2025-07-01", Some("T")))
            .collect(),
        ..DashboardData::default()
    };
    let entries = due_entries(&data, now());
    assert_eq!(entries.len(), DUE_LIST_LIMIT);
    assert_eq!(entries[0].id, "i0");
}

#[test]
fn long_titles_are_truncated_on_char_boundaries() {
    assert_eq!(truncate_title("A Tale of Two Cities, Revisited"), "A Tale of Two Cities...");
    assert_eq!(truncate_title("Exactly twenty chars"), "Exactly twenty chars");
    assert_eq!(truncate_title("ශ්‍රී ලංකා ඉතිහාසය සහ සංස්කෘතිය"), format!("{}...", "ශ්‍රී ලංකා ඉතිහාසය සහ සංස්කෘතිය".chars().take(20).collect::<String>()));
}
