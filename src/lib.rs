//! expense-insights - expense aggregation and trend forecasting
//!
//! This library records personal expenses in a local JSON store and derives
//! analytic views from them: totals per day/week/month/year, per-category
//! breakdowns, a this-month versus last-month comparison, weekday spending
//! patterns, and a least-squares trend with a short forecast.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (expense records, money, ranges, granularity)
//! - `storage`: JSON file storage layer
//! - `services`: Recording, validation and CSV import
//! - `analytics`: Pure aggregation and forecasting over record slices
//! - `reports`: The combined analytics report
//! - `export`: CSV and JSON export
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_insights::analytics::{trend_buckets, ExpenseQuery};
//! use expense_insights::models::{DateRange, ExpenseRecord, Money};
//!
//! let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let records = vec![
//!     ExpenseRecord::new("local", Money::from_units(100), "Food & Dining", day(1, 5)),
//!     ExpenseRecord::new("local", Money::from_units(60), "Travel", day(2, 10)),
//! ];
//!
//! let query = ExpenseQuery::new(DateRange::new(day(1, 1), day(2, 29)));
//! let buckets = trend_buckets(&records, &query);
//! assert_eq!(buckets[0].key, "Jan 2024");
//! assert_eq!(buckets[1].total, Money::from_units(60));
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::InsightsError;
