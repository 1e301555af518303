//! Inclusive date ranges used to filter expenses

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` calendar range.
///
/// `start <= end` is not enforced here; an inverted range simply contains no
/// dates. Callers that take ranges from user input check it with
/// [`DateRange::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days ending on (and including) `today`
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(days.saturating_sub(1) as u64))
            .unwrap_or(today);
        Self { start, end: today }
    }

    /// The whole calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    /// A range covering every representable date
    pub fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(!range.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(!range.is_valid());
        assert!(!range.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_last_days() {
        let range = DateRange::last_days(date(2024, 3, 30), 30);
        assert_eq!(range.start, date(2024, 3, 1));
        assert_eq!(range.end, date(2024, 3, 30));
    }

    #[test]
    fn test_month_of() {
        let range = DateRange::month_of(date(2024, 2, 10));
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));

        let december = DateRange::month_of(date(2023, 12, 5));
        assert_eq!(december.end, date(2023, 12, 31));
    }
}
