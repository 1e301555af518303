//! Record filtering shared by every aggregator

use serde::{Deserialize, Serialize};

use super::trend::DEFAULT_FORECAST_HORIZON;
use crate::models::{CategoryFilter, DateRange, ExpenseRecord, Granularity};

/// Everything that parameterises one analytics pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseQuery {
    pub range: DateRange,
    pub category: CategoryFilter,
    pub granularity: Granularity,
    /// Number of future periods to forecast
    pub horizon: usize,
}

impl ExpenseQuery {
    /// All categories, monthly buckets, default horizon
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            category: CategoryFilter::All,
            granularity: Granularity::Monthly,
            horizon: DEFAULT_FORECAST_HORIZON,
        }
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.range.contains(record.date) && self.category.matches(&record.category)
    }

    /// Borrow the records this query selects, preserving input order
    pub fn apply<'a>(&self, records: &'a [ExpenseRecord]) -> Vec<&'a ExpenseRecord> {
        filter_records(records, &self.range, &self.category)
    }
}

/// Keep records dated within `range` (inclusive) whose category matches.
///
/// The input is never reordered or modified.
pub fn filter_records<'a>(
    records: &'a [ExpenseRecord],
    range: &DateRange,
    category: &CategoryFilter,
) -> Vec<&'a ExpenseRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.date) && category.matches(&r.category))
        .collect()
}
