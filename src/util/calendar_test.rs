use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn grid_pads_to_first_weekday() {
    // 1 June 2025 is a Sunday, 1 March 2025 a Saturday.
    let june = CalendarMonth { year: 2025, month: 6 }.grid();
    assert_eq!(june.first(), Some(&Some(1)));
    let march = CalendarMonth { year: 2025, month: 3 }.grid();
    assert_eq!(march.iter().take_while(|c| c.is_none()).count(), 6);
    assert_eq!(march.last(), Some(&Some(31)));
}

#[test]
fn february_respects_leap_years() {
    assert_eq!(CalendarMonth { year: 2024, month: 2 }.days_in_month(), 29);
    assert_eq!(CalendarMonth { year: 2025, month: 2 }.days_in_month(), 28);
    assert_eq!(CalendarMonth { year: 1900, month: 2 }.days_in_month(), 28);
}

#[test]
fn december_has_31_days() {
    assert_eq!(CalendarMonth { year: 2025, month: 12 }.days_in_month(), 31);
}

#[test]
fn shifted_carries_across_years() {
    let jan = CalendarMonth { year: 2025, month: 1 };
    assert_eq!(jan.shifted(-1), CalendarMonth { year: 2024, month: 12 });
    assert_eq!(jan.shifted(12), CalendarMonth { year: 2026, month: 1 });
    assert_eq!(CalendarMonth { year: 2025, month: 12 }.shifted(1), CalendarMonth { year: 2026, month: 1 });
}

#[test]
fn today_is_only_highlighted_in_its_month() {
    let today = date(2025, 6, 15);
    let june = CalendarMonth::containing(today);
    assert!(june.is_today(15, today));
    assert!(!june.is_today(14, today));
    assert!(!june.shifted(12).is_today(15, today));
}

#[test]
fn title_names_month_and_year() {
    assert_eq!(CalendarMonth { year: 2025, month: 6 }.title(), "June 2025");
}

#[test]
fn today_follows_viewer_timezone() {
    // 20:30 UTC on 28 Feb is already 1 March in Colombo.
    let now = Utc.with_ymd_and_hms(2025, 2, 28, 20, 30, 0).unwrap();
    let colombo = chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let today = today_in(now, &colombo);
    assert_eq!(today, date(2025, 3, 1));

    let shown = CalendarMonth::containing(today);
    assert_eq!(shown, CalendarMonth { year: 2025, month: 3 });
    assert!(shown.is_today(1, today));
    assert!(!shown.shifted(-1).is_today(28, today));
    assert_eq!(today_in(now, &Utc), date(2025, 2, 28));
}
