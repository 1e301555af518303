//! Reports module for expense-insights
//!
//! Combines the analytics views into a single report that can be printed
//! to the terminal or serialized.

pub mod analytics;

pub use analytics::AnalyticsReport;
