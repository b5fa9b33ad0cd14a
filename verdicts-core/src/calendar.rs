//! Month-grid math for the admin calendar.

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Sunday-first weeks; `None` cells pad the leading and trailing edges.
    pub weeks: Vec<[Option<u32>; 7]>,
}

pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let days = NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()?
        .day();

    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;

    for day in 1..=days {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }

    Some(MonthGrid { year, month, weeks })
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// The backend keys cases-by-date responses as `YYYY-MM-DD`.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_2024_is_a_leap_month() {
        let grid = month_grid(2024, 2).expect("grid");
        let days: Vec<u32> = grid
            .weeks
            .iter()
            .flatten()
            .filter_map(|d| *d)
            .collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&29));
        // Feb 1 2024 was a Thursday.
        assert_eq!(grid.weeks[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2026, 6), (2026, 7));
    }

    #[test]
    fn date_key_is_zero_padded() {
        assert_eq!(date_key(2026, 8, 7), "2026-08-07");
        assert_eq!(date_key(2026, 11, 23), "2026-11-23");
    }

    #[test]
    fn rejects_invalid_months() {
        assert!(month_grid(2026, 13).is_none());
        assert!(month_grid(2026, 0).is_none());
    }
}
