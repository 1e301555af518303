//! Weekday spending patterns

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Weekdays in bucket order, Sunday first
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Full English weekday name
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Total spend attributed to one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpending {
    pub day: String,
    pub amount: Money,
}

/// Summary of spend by day of week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPattern {
    /// Weekday with the largest total; `None` when there are no records
    pub highest_day: Option<DaySpending>,
    /// Weekday with the smallest total; `None` when there are no records
    pub lowest_day: Option<DaySpending>,
    /// Sum of all seven weekday totals divided by 7, in currency units
    pub average_daily_spending: f64,
    /// Number of records analysed
    pub total_transactions: usize,
    /// Totals for Sunday through Saturday
    pub weekday_totals: [Money; 7],
}

/// Sum spend per weekday and pick out the extremes.
///
/// Only weekdays that had at least one record compete for highest and
/// lowest, and the running extremes start empty rather than at zero, so a
/// set made up entirely of refunds still reports its real highest day. Ties
/// go to the earlier weekday (Sunday first). The average always divides by
/// the seven fixed weekdays, not by the number of active days.
pub fn analyze_spending_patterns<'a, I>(records: I) -> SpendingPattern
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals = [Money::zero(); 7];
    let mut active = [false; 7];
    let mut count = 0usize;

    for record in records {
        let slot = record.date.weekday().num_days_from_sunday() as usize;
        totals[slot] += record.amount;
        active[slot] = true;
        count += 1;
    }

    let mut highest: Option<(usize, Money)> = None;
    let mut lowest: Option<(usize, Money)> = None;
    for slot in (0..7).filter(|&slot| active[slot]) {
        let amount = totals[slot];
        if highest.map_or(true, |(_, best)| amount > best) {
            highest = Some((slot, amount));
        }
        if lowest.map_or(true, |(_, least)| amount < least) {
            lowest = Some((slot, amount));
        }
    }

    let to_day = |(slot, amount): (usize, Money)| DaySpending {
        day: weekday_name(WEEKDAYS[slot]).to_string(),
        amount,
    };
    let total: Money = totals.iter().sum();

    SpendingPattern {
        highest_day: highest.map(to_day),
        lowest_day: lowest.map(to_day),
        average_daily_spending: total.to_f64() / 7.0,
        total_transactions: count,
        weekday_totals: totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(amount: i64, y: i32, m: u32, d: u32) -> ExpenseRecord {
        ExpenseRecord::new(
            "local",
            Money::from_units(amount),
            "Other",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_single_monday_record() {
        // 2024-01-08 is a Monday
        let records = vec![record(70, 2024, 1, 8)];
        let pattern = analyze_spending_patterns(&records);

        let highest = pattern.highest_day.unwrap();
        assert_eq!(highest.day, "Monday");
        assert_eq!(highest.amount.units(), 70);
        assert_eq!(pattern.lowest_day.unwrap().day, "Monday");
        assert!((pattern.average_daily_spending - 10.0).abs() < 1e-9);
        assert_eq!(pattern.total_transactions, 1);
    }

    #[test]
    fn test_highest_and_lowest_across_days() {
        let records = vec![
            record(20, 2024, 1, 7),  // Sunday
            record(30, 2024, 1, 14), // Sunday
            record(5, 2024, 1, 10),  // Wednesday
            record(80, 2024, 1, 12), // Friday
        ];
        let pattern = analyze_spending_patterns(&records);

        assert_eq!(pattern.highest_day.unwrap().day, "Friday");
        let lowest = pattern.lowest_day.unwrap();
        assert_eq!(lowest.day, "Wednesday");
        assert_eq!(lowest.amount.units(), 5);
        assert_eq!(pattern.weekday_totals[0].units(), 50);
        assert_eq!(pattern.total_transactions, 4);
        assert!((pattern.average_daily_spending - 135.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_negative_totals_still_report_highest() {
        let records = vec![record(-10, 2024, 1, 8), record(-30, 2024, 1, 9)];
        let pattern = analyze_spending_patterns(&records);

        let highest = pattern.highest_day.unwrap();
        assert_eq!(highest.day, "Monday");
        assert_eq!(highest.amount.units(), -10);
        assert_eq!(pattern.lowest_day.unwrap().day, "Tuesday");
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<ExpenseRecord> = Vec::new();
        let pattern = analyze_spending_patterns(&records);

        assert!(pattern.highest_day.is_none());
        assert!(pattern.lowest_day.is_none());
        assert_eq!(pattern.average_daily_spending, 0.0);
        assert_eq!(pattern.total_transactions, 0);
    }
}
