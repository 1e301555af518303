//! Headline figures for a set of expenses

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Totals shown above the expense list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: Money,
    /// Mean amount per record, in currency units
    pub average: f64,
    pub highest: Money,
    pub lowest: Money,
    pub count: usize,
    /// Spend dated within the 30 days up to and including `today`
    pub last_30_days: Money,
}

impl ExpenseSummary {
    /// Summarise `records`; every figure is zero for an empty set
    pub fn from_records<'a, I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let window_start = today.checked_sub_days(Days::new(30)).unwrap_or(today);

        let mut total = Money::zero();
        let mut highest: Option<Money> = None;
        let mut lowest: Option<Money> = None;
        let mut count = 0usize;
        let mut last_30_days = Money::zero();

        for record in records {
            total += record.amount;
            count += 1;
            highest = Some(highest.map_or(record.amount, |h| h.max(record.amount)));
            lowest = Some(lowest.map_or(record.amount, |l| l.min(record.amount)));
            if record.date >= window_start && record.date <= today {
                last_30_days += record.amount;
            }
        }

        let average = if count == 0 {
            0.0
        } else {
            total.to_f64() / count as f64
        };

        Self {
            total,
            average,
            highest: highest.unwrap_or_default(),
            lowest: lowest.unwrap_or_default(),
            count,
            last_30_days,
        }
    }
}
