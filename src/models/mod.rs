//! Core data models for expense-insights
//!
//! Expense records plus the small value types (money, ranges, filters,
//! granularity) the analytics layer is parameterised by.

pub mod category;
pub mod expense;
pub mod granularity;
pub mod ids;
pub mod money;
pub mod range;

pub use category::{canonical_category, CategoryFilter, PREDEFINED_CATEGORIES};
pub use expense::ExpenseRecord;
pub use granularity::Granularity;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use range::DateRange;
