//! Month-over-month comparison aggregator
//!
//! Splits records into the calendar month of a reference date and the
//! calendar month before it. Months are matched on year and month together,
//! and January's previous month is December of the prior year.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Current vs previous month totals for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub current_period: Money,
    pub previous_period: Money,
}

impl ComparisonEntry {
    /// Percentage change from the previous to the current period
    pub fn change(&self) -> f64 {
        month_over_month_change(self.current_period.to_f64(), self.previous_period.to_f64())
    }
}

/// A calendar month, used to partition records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl CalendarMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The preceding month, wrapping January to December of the prior year
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// Compare per-category spend in the month of `reference` against the month
/// before.
///
/// Every category appearing in either month gets one entry, zero for the
/// month it is absent from. Entries are ordered by first appearance, scanning
/// the current month's records before the previous month's.
pub fn compare_months<'a, I>(records: I, reference: NaiveDate) -> Vec<ComparisonEntry>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let current = CalendarMonth::of(reference);
    let previous = current.previous();

    let (current_records, previous_records): (Vec<&ExpenseRecord>, Vec<&ExpenseRecord>) = records
        .into_iter()
        .filter(|r| current.contains(r.date) || previous.contains(r.date))
        .partition(|r| current.contains(r.date));

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<ComparisonEntry> = Vec::new();

    for (record, is_current) in current_records
        .iter()
        .map(|r| (*r, true))
        .chain(previous_records.iter().map(|r| (*r, false)))
    {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            entries.push(ComparisonEntry {
                name: record.category.clone(),
                current_period: Money::zero(),
                previous_period: Money::zero(),
            });
            entries.len() - 1
        });

        if is_current {
            entries[slot].current_period += record.amount;
        } else {
            entries[slot].previous_period += record.amount;
        }
    }

    entries
}

/// Percentage change from `previous` to `current`; 0 when `previous` is zero
pub fn month_over_month_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(amount: i64, category: &str, day: NaiveDate) -> ExpenseRecord {
        ExpenseRecord::new("local", Money::from_units(amount), category, day)
    }

    #[test]
    fn test_partition_and_encounter_order() {
        let records = vec![
            record(40, "Travel", date(2024, 5, 3)),
            record(10, "Food", date(2024, 6, 1)),
            record(15, "Food", date(2024, 5, 20)),
            record(99, "Housing", date(2024, 4, 1)), // two months back, ignored
            record(5, "Shopping", date(2024, 6, 30)),
        ];
        let entries = compare_months(&records, date(2024, 6, 15));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Shopping", "Travel"]);

        assert_eq!(entries[0].current_period.units(), 10);
        assert_eq!(entries[0].previous_period.units(), 15);
        assert_eq!(entries[1].previous_period, Money::zero());
        assert_eq!(entries[2].current_period, Money::zero());
        assert_eq!(entries[2].previous_period.units(), 40);
    }

    #[test]
    fn test_january_wraps_to_previous_december() {
        let records = vec![
            record(30, "Food", date(2024, 12, 28)),
            record(20, "Food", date(2025, 1, 4)),
            record(70, "Food", date(2025, 12, 1)), // same month index, wrong year
        ];
        let entries = compare_months(&records, date(2025, 1, 10));

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].current_period.units(), 20);
        assert_eq!(entries[0].previous_period.units(), 30);
    }

    #[test]
    fn test_same_month_of_other_year_is_excluded() {
        let records = vec![record(10, "Food", date(2023, 6, 5))];
        assert!(compare_months(&records, date(2024, 6, 5)).is_empty());
    }

    #[test]
    fn test_month_over_month_change() {
        assert_eq!(month_over_month_change(150.0, 100.0), 50.0);
        assert_eq!(month_over_month_change(50.0, 100.0), -50.0);
        assert_eq!(month_over_month_change(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_calendar_month_previous() {
        assert_eq!(
            CalendarMonth { year: 2024, month: 1 }.previous(),
            CalendarMonth { year: 2023, month: 12 }
        );
        assert_eq!(
            CalendarMonth { year: 2024, month: 7 }.previous(),
            CalendarMonth { year: 2024, month: 6 }
        );
    }
}
