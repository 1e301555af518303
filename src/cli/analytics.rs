//! CLI commands for analytics
//!
//! Each subcommand prints one analytics view over the configured owner's
//! records; `report` prints all of them.

use chrono::NaiveDate;
use clap::Subcommand;
use tracing::debug;

use super::{load_owner_records, parse_date_arg, today, FilterArgs};
use crate::analytics::{
    analyze_spending_patterns, category_totals, compare_months, filter_records, forecast,
    predict_next_period, trend_buckets, ExpenseSummary, TrendModel,
};
use crate::config::Settings;
use crate::display::{
    format_bucket_table, format_category_table, format_comparison_table, format_forecast_table,
    format_pattern, format_summary,
};
use crate::error::InsightsResult;
use crate::models::{DateRange, Granularity};
use crate::reports::AnalyticsReport;
use crate::storage::Storage;

/// Analytics subcommands
#[derive(Subcommand, Debug)]
pub enum AnalyticsCommands {
    /// Spending totals per period
    Trends {
        #[command(flatten)]
        filter: FilterArgs,
        /// Period length
        #[arg(short, long, value_enum)]
        granularity: Option<Granularity>,
    },

    /// Spending per category, largest first
    Categories {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// This month against last month, per category
    Compare {
        /// Category to restrict to, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Any date in the month to treat as "this month" (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        reference: Option<String>,
    },

    /// Spending by day of week
    Patterns {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Linear trend and projected totals
    Forecast {
        #[command(flatten)]
        filter: FilterArgs,
        /// Period length
        #[arg(short, long, value_enum)]
        granularity: Option<Granularity>,
        /// Number of periods to project
        #[arg(long)]
        horizon: Option<usize>,
    },

    /// Headline totals
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Every view in one report
    Report {
        #[command(flatten)]
        filter: FilterArgs,
        /// Period length
        #[arg(short, long, value_enum)]
        granularity: Option<Granularity>,
        /// Number of periods to project
        #[arg(long)]
        horizon: Option<usize>,
        /// Reference date for the month comparison (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        reference: Option<String>,
    },
}

fn reference_date(reference: Option<&str>) -> InsightsResult<NaiveDate> {
    match reference {
        Some(r) => parse_date_arg(r, "reference"),
        None => Ok(today()),
    }
}

/// Handle analytics commands
pub fn handle_analytics_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AnalyticsCommands,
) -> InsightsResult<()> {
    let records = load_owner_records(storage, settings)?;
    let currency = settings.currency_symbol.as_str();
    let today = today();
    debug!(records = records.len(), "loaded records for analytics");

    match cmd {
        AnalyticsCommands::Trends {
            filter,
            granularity,
        } => {
            let query = filter.query(settings, granularity, today)?;
            let buckets = trend_buckets(&records, &query);
            println!("Spending by {} period: {}", query.granularity, query.range);
            println!("{}", format_bucket_table(&buckets, currency));
        }

        AnalyticsCommands::Categories { filter } => {
            let query = filter.query(settings, None, today)?;
            let totals = category_totals(query.apply(&records));
            println!("Spending by category: {}", query.range);
            println!("{}", format_category_table(&totals, currency));
        }

        AnalyticsCommands::Compare {
            category,
            reference,
        } => {
            let reference = reference_date(reference.as_deref())?;
            let filter = FilterArgs {
                category,
                ..FilterArgs::default()
            };
            let selected = filter_records(
                &records,
                &DateRange::unbounded(),
                &filter.category_filter(),
            );
            let entries = compare_months(selected, reference);
            println!("Month comparison for {}", reference.format("%B %Y"));
            println!("{}", format_comparison_table(&entries, currency));
        }

        AnalyticsCommands::Patterns { filter } => {
            let query = filter.query(settings, None, today)?;
            let pattern = analyze_spending_patterns(query.apply(&records));
            println!("Spending patterns: {}", query.range);
            print!("{}", format_pattern(&pattern, currency));
        }

        AnalyticsCommands::Forecast {
            filter,
            granularity,
            horizon,
        } => {
            let query = filter.query(settings, granularity, today)?;
            let horizon = horizon.unwrap_or(query.horizon);
            let buckets = trend_buckets(&records, &query);
            let model = TrendModel::from_buckets(&buckets);

            println!(
                "Forecast over {} {} period(s): slope {:.2}, intercept {:.2}",
                buckets.len(),
                query.granularity,
                model.slope,
                model.intercept
            );
            println!("{}", format_forecast_table(&forecast(&buckets, horizon), currency));
            if !buckets.is_empty() {
                println!(
                    "Next period estimate: {}{:.2}",
                    currency,
                    predict_next_period(&buckets)
                );
            }
        }

        AnalyticsCommands::Summary { filter } => {
            let query = filter.query(settings, None, today)?;
            let summary = ExpenseSummary::from_records(query.apply(&records), today);
            println!("Summary: {}", query.range);
            print!("{}", format_summary(&summary, currency));
        }

        AnalyticsCommands::Report {
            filter,
            granularity,
            horizon,
            reference,
        } => {
            let mut query = filter.query(settings, granularity, today)?;
            if let Some(horizon) = horizon {
                query = query.horizon(horizon);
            }
            let reference = reference_date(reference.as_deref())?;
            let report = AnalyticsReport::generate(&records, &query, reference);
            println!("{}", report.format_terminal(currency));
        }
    }

    Ok(())
}
