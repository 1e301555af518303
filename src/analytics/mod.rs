//! Expense aggregation and forecasting
//!
//! Pure functions over borrowed record slices. Nothing here does I/O, holds
//! state between calls, or mutates its input; the same inputs always produce
//! the same outputs. Every function is total: empty input gives empty or
//! zero-valued output.
//!
//! - `filter`: date range and category selection
//! - `buckets`: per-period totals at a chosen granularity
//! - `categories`: per-category totals, largest first
//! - `comparison`: this month vs last month by category
//! - `patterns`: spend by weekday
//! - `trend`: least-squares trend and forecast over buckets
//! - `summary`: headline totals

pub mod buckets;
pub mod categories;
pub mod comparison;
pub mod filter;
pub mod patterns;
pub mod summary;
pub mod trend;

pub use buckets::{bucket_totals, daily_buckets, trend_buckets, Bucket};
pub use categories::{category_totals, CategoryTotal};
pub use comparison::{compare_months, month_over_month_change, ComparisonEntry};
pub use filter::{filter_records, ExpenseQuery};
pub use patterns::{analyze_spending_patterns, DaySpending, SpendingPattern};
pub use summary::ExpenseSummary;
pub use trend::{forecast, predict_next_period, ForecastPoint, TrendModel, DEFAULT_FORECAST_HORIZON};
