//! Time-bucketing aggregator
//!
//! Sums expense amounts per time period. Buckets come out in chronological
//! order of the period they denote, never in lexical order of their keys, so
//! `Feb 2024` precedes `Jan 2025` and `12/29/2024` precedes `1/5/2025`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::ExpenseQuery;
use crate::models::{ExpenseRecord, Granularity, Money};

/// Total spend for one time period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Display key, e.g. `Jan 2024` (see [`Granularity::key_for`])
    pub key: String,
    /// First calendar day of the period
    pub start: NaiveDate,
    /// Sum of record amounts in the period
    pub total: Money,
}

/// Aggregate already-filtered records into chronologically ordered buckets.
///
/// Accumulation is keyed on the period's first day, which is exactly the date
/// the bucket key parses back to, so ordering by it is ordering by key date.
pub fn bucket_totals<'a, I>(records: I, granularity: Granularity) -> Vec<Bucket>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut totals: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for record in records {
        *totals
            .entry(granularity.period_start(record.date))
            .or_default() += record.amount;
    }

    totals
        .into_iter()
        .map(|(start, total)| Bucket {
            key: granularity.key_for(start),
            start,
            total,
        })
        .collect()
}

/// Filter `records` with the query's range and category, then bucket them
/// with the query's granularity
pub fn trend_buckets(records: &[ExpenseRecord], query: &ExpenseQuery) -> Vec<Bucket> {
    bucket_totals(query.apply(records), query.granularity)
}

/// Per-day buckets, regardless of the query's granularity
pub fn daily_buckets(records: &[ExpenseRecord], query: &ExpenseQuery) -> Vec<Bucket> {
    bucket_totals(query.apply(records), Granularity::Daily)
}
