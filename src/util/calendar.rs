//! Month grid for the dashboard calendar.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar day of the instant `now` for a viewer in `tz`.
pub fn today_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

/// A displayed calendar month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl CalendarMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Move by `delta` months, carrying across year boundaries.
    #[must_use]
    pub fn shifted(self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self { year: index.div_euclid(12), month: index.rem_euclid(12) as u32 + 1 }
    }

    pub fn title(self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.shifted(1);
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Grid cells, Sunday first: `None` pads the weekdays before the 1st,
    /// then `Some(1)..=Some(last)`.
    pub fn grid(self) -> Vec<Option<u32>> {
        let Some(first) = self.first_day() else {
            return Vec::new();
        };
        let leading = first.weekday().num_days_from_sunday() as usize;
        std::iter::repeat_n(None, leading)
            .chain((1..=self.days_in_month()).map(Some))
            .collect()
    }

    /// True if `day` of this month is `today`.
    pub fn is_today(self, day: u32, today: NaiveDate) -> bool {
        self == Self::containing(today) && day == today.day()
    }
}
