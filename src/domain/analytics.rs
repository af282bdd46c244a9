//! Time-bucketed entry counts
//!
//! All functions are pure over a snapshot of entries. Entries without a
//! creation timestamp are skipped by every aggregation.

use crate::domain::JournalEntry;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// A `(year, month)` bucket, ordered by year then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        YearMonth { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn dates(entries: &[JournalEntry]) -> impl Iterator<Item = NaiveDate> + '_ {
    entries.iter().filter_map(JournalEntry::date)
}

/// Count entries per week, keyed by the Monday that starts the week
pub fn weekly_series(entries: &[JournalEntry]) -> BTreeMap<NaiveDate, usize> {
    let mut series = BTreeMap::new();
    for date in dates(entries) {
        *series.entry(week_start(date)).or_insert(0) += 1;
    }
    series
}

/// Count entries per calendar month
pub fn monthly_series(entries: &[JournalEntry]) -> BTreeMap<YearMonth, usize> {
    let mut series = BTreeMap::new();
    for date in dates(entries) {
        *series.entry(YearMonth::of(date)).or_insert(0) += 1;
    }
    series
}

/// Month-by-year count table. Every year with at least one entry carries
/// all twelve months, absent combinations counting zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyPivot {
    columns: BTreeMap<i32, [usize; 12]>,
}

impl YearlyPivot {
    /// Years present in the data, ascending
    pub fn years(&self) -> Vec<i32> {
        self.columns.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Count for `month` (1-12) in `year`.
    /// Returns `None` when the year has no entries or the month is out of range.
    pub fn get(&self, month: u32, year: i32) -> Option<usize> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.columns
            .get(&year)
            .map(|counts| counts[month as usize - 1])
    }

    /// Sum of all cells for a year
    pub fn year_total(&self, year: i32) -> usize {
        self.columns
            .get(&year)
            .map(|counts| counts.iter().sum())
            .unwrap_or(0)
    }
}

/// Build the month-by-year pivot
pub fn yearly_pivot(entries: &[JournalEntry]) -> YearlyPivot {
    let mut pivot = YearlyPivot::default();
    for date in dates(entries) {
        let counts = pivot.columns.entry(date.year()).or_insert([0; 12]);
        counts[date.month0() as usize] += 1;
    }
    pivot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::parse_timestamp;

    fn entry(id: i64, date: &str) -> JournalEntry {
        JournalEntry {
            id,
            owner: "ayse".to_string(),
            text: format!("entry {}", id),
            attachment_ref: None,
            created_at: parse_timestamp(date),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        // 2024-01-01 is a Monday
        assert_eq!(week_start(date(2024, 1, 1)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 7)), date(2024, 1, 1));
        assert_eq!(week_start(date(2024, 1, 8)), date(2024, 1, 8));
        // Crosses a year boundary
        assert_eq!(week_start(date(2023, 1, 1)), date(2022, 12, 26));
    }

    #[test]
    fn test_weekly_series() {
        let entries = vec![
            entry(1, "2024-01-03 09:00:00"),
            entry(2, "2024-01-07 22:10:00"),
            entry(3, "2024-01-08 08:00:00"),
            entry(4, "2023-12-31 12:00:00"),
        ];
        let series = weekly_series(&entries);
        let points: Vec<_> = series.into_iter().collect();
        assert_eq!(
            points,
            vec![
                (date(2023, 12, 25), 1),
                (date(2024, 1, 1), 2),
                (date(2024, 1, 8), 1),
            ]
        );
    }

    #[test]
    fn test_monthly_series() {
        let entries = vec![
            entry(1, "2024-01-05 10:00:00"),
            entry(2, "2024-01-20 18:30:00"),
            entry(3, "2023-11-02 07:00:00"),
        ];
        let series = monthly_series(&entries);
        assert_eq!(series.get(&YearMonth::new(2024, 1)), Some(&2));
        let keys: Vec<String> = series.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["2023-11", "2024-01"]);
    }

    #[test]
    fn test_yearly_pivot_fills_zeros() {
        let entries = vec![
            entry(1, "2023-01-10 10:00:00"),
            entry(2, "2023-01-10 11:00:00"),
            entry(3, "2024-02-03 12:00:00"),
        ];
        let pivot = yearly_pivot(&entries);
        assert_eq!(pivot.years(), vec![2023, 2024]);
        assert_eq!(pivot.get(1, 2023), Some(2));
        assert_eq!(pivot.get(2, 2024), Some(1));
        assert_eq!(pivot.get(1, 2024), Some(0));
        assert_eq!(pivot.get(12, 2023), Some(0));
        assert_eq!(pivot.get(1, 2022), None);
        assert_eq!(pivot.get(13, 2023), None);
        assert_eq!(pivot.year_total(2023), 2);
    }

    #[test]
    fn test_yearly_pivot_is_rectangular() {
        let entries = vec![entry(1, "2021-06-01 00:00:00"), entry(2, "2024-12-31 23:59:59")];
        let pivot = yearly_pivot(&entries);
        assert_eq!(pivot.years(), vec![2021, 2024]);
        for year in pivot.years() {
            for month in 1..=12 {
                assert!(pivot.get(month, year).is_some());
            }
        }
        assert_eq!(pivot.get(6, 2021), Some(1));
        assert_eq!(pivot.get(6, 2024), Some(0));
        assert_eq!(pivot.get(12, 2024), Some(1));
        // Years between the data points carry no column
        assert_eq!(pivot.get(1, 2022), None);
    }

    #[test]
    fn test_undated_entries_are_excluded() {
        let entries = vec![
            entry(1, "2024-01-05 10:00:00"),
            entry(2, ""),
            entry(3, "not a date"),
        ];
        assert_eq!(weekly_series(&entries).values().sum::<usize>(), 1);
        assert_eq!(monthly_series(&entries).values().sum::<usize>(), 1);
        assert_eq!(yearly_pivot(&entries).year_total(2024), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(weekly_series(&[]).is_empty());
        assert!(monthly_series(&[]).is_empty());
        assert!(yearly_pivot(&[]).is_empty());
    }
}
