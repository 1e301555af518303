//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and analytics layers.

pub mod analytics;
pub mod expense;
pub mod export;

pub use analytics::{handle_analytics_command, AnalyticsCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::analytics::ExpenseQuery;
use crate::config::Settings;
use crate::error::{InsightsError, InsightsResult};
use crate::models::{CategoryFilter, DateRange, Granularity};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date_arg(value: &str, label: &str) -> InsightsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        InsightsError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            label, value
        ))
    })
}

/// Date range and category arguments shared by listing, analytics and export
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Start date (YYYY-MM-DD); defaults to the configured window before the end date
    #[arg(short, long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub end: Option<String>,

    /// Category to restrict to, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

impl FilterArgs {
    /// Resolve the range, rejecting an end date before the start date
    pub fn range(&self, settings: &Settings, today: NaiveDate) -> InsightsResult<DateRange> {
        let end = match &self.end {
            Some(e) => parse_date_arg(e, "end")?,
            None => today,
        };
        let start = match &self.start {
            Some(s) => parse_date_arg(s, "start")?,
            None => DateRange::last_days(end, settings.default_range_days).start,
        };

        let range = DateRange::new(start, end);
        if !range.is_valid() {
            return Err(InsightsError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(range)
    }

    pub fn category_filter(&self) -> CategoryFilter {
        // Parsing a category filter cannot fail
        self.category.parse().unwrap_or_default()
    }

    /// Build an analytics query using the configured defaults
    pub fn query(
        &self,
        settings: &Settings,
        granularity: Option<Granularity>,
        today: NaiveDate,
    ) -> InsightsResult<ExpenseQuery> {
        Ok(ExpenseQuery::new(self.range(settings, today)?)
            .category(self.category_filter())
            .granularity(granularity.unwrap_or(settings.default_granularity))
            .horizon(settings.forecast_horizon))
    }
}

/// Load every record of the configured owner
pub fn load_owner_records(
    storage: &Storage,
    settings: &Settings,
) -> InsightsResult<Vec<crate::models::ExpenseRecord>> {
    ExpenseService::new(storage, settings.validation).all(&settings.owner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_ends_today() {
        let settings = Settings::default();
        let range = FilterArgs::default().range(&settings, date(2024, 3, 31)).unwrap();
        assert_eq!(range.end, date(2024, 3, 31));
        assert_eq!(range.start, date(2024, 3, 2));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let args = FilterArgs {
            start: Some("2024-05-01".into()),
            end: Some("2024-04-01".into()),
            category: "all".into(),
        };
        let err = args.range(&Settings::default(), date(2024, 6, 1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_query_uses_settings_defaults() {
        let mut settings = Settings::default();
        settings.default_granularity = Granularity::Weekly;
        settings.forecast_horizon = 6;
        let args = FilterArgs {
            start: Some("2024-01-01".into()),
            end: None,
            category: "travel".into(),
        };

        let query = args.query(&settings, None, date(2024, 2, 1)).unwrap();
        assert_eq!(query.granularity, Granularity::Weekly);
        assert_eq!(query.horizon, 6);
        assert_eq!(query.category, CategoryFilter::only("Travel"));

        let query = args.query(&settings, Some(Granularity::Yearly), date(2024, 2, 1)).unwrap();
        assert_eq!(query.granularity, Granularity::Yearly);
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("2024-02-29", "start").unwrap(), date(2024, 2, 29));
        assert!(parse_date_arg("02/29/2024", "start").is_err());
    }
}
