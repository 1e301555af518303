//! Analytics Report
//!
//! Bundles every analytics view for one query: period totals, category
//! breakdown, month comparison, weekday pattern and forecast.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::analytics::{
    analyze_spending_patterns, bucket_totals, category_totals, compare_months, daily_buckets,
    forecast, predict_next_period, Bucket, CategoryTotal, ComparisonEntry, ExpenseQuery,
    ExpenseSummary, ForecastPoint, SpendingPattern, TrendModel,
};
use crate::models::{ExpenseRecord, Money};

/// Analytics report for one query
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    /// Query the report was generated for
    pub query: ExpenseQuery,
    /// Reference date for the month comparison and summary window
    pub reference_date: NaiveDate,
    /// Records selected by the query
    pub records: Vec<ExpenseRecord>,
    /// Totals at the query's granularity
    pub buckets: Vec<Bucket>,
    /// Totals per day
    pub daily: Vec<Bucket>,
    pub categories: Vec<CategoryTotal>,
    pub comparison: Vec<ComparisonEntry>,
    pub pattern: SpendingPattern,
    pub trend: TrendModel,
    pub forecast: Vec<ForecastPoint>,
    /// Predicted total for the period after the last bucket
    pub next_period: f64,
    pub summary: ExpenseSummary,
}

impl AnalyticsReport {
    /// Generate a report over `records` for `query`
    pub fn generate(records: &[ExpenseRecord], query: &ExpenseQuery, reference_date: NaiveDate) -> Self {
        let selected = query.apply(records);

        let buckets = bucket_totals(selected.iter().copied(), query.granularity);
        let daily = daily_buckets(records, query);
        let categories = category_totals(selected.iter().copied());
        let comparison = compare_months(selected.iter().copied(), reference_date);
        let pattern = analyze_spending_patterns(selected.iter().copied());
        let summary = ExpenseSummary::from_records(selected.iter().copied(), reference_date);

        let trend = TrendModel::from_buckets(&buckets);
        let forecast = forecast(&buckets, query.horizon);
        let next_period = predict_next_period(&buckets);

        debug!(
            records = selected.len(),
            buckets = buckets.len(),
            categories = categories.len(),
            granularity = %query.granularity,
            "generated analytics report"
        );

        Self {
            query: query.clone(),
            reference_date,
            records: selected.into_iter().cloned().collect(),
            buckets,
            daily,
            categories,
            comparison,
            pattern,
            trend,
            forecast,
            next_period,
            summary,
        }
    }

    /// Sum of every selected record
    pub fn total(&self) -> Money {
        self.summary.total
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let units = |v: f64| format!("{}{:.2}", currency, v);
        let mut output = String::new();

        output.push_str(&format!(
            "Expense Analytics: {} ({}, category: {})\n",
            self.query.range, self.query.granularity, self.query.category
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n", money(self.summary.total)));
        output.push_str(&format!("Transactions: {}\n", self.summary.count));
        output.push_str(&format!("Average Expense: {}\n", units(self.summary.average)));
        output.push_str(&format!(
            "Last 30 Days (to {}): {}\n\n",
            self.reference_date,
            money(self.summary.last_30_days)
        ));

        output.push_str(&format!("{:<35} {:>12}\n", "Period", "Amount"));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for bucket in &self.buckets {
            output.push_str(&format!("{:<35} {:>12}\n", bucket.key, money(bucket.total)));
        }

        output.push_str(&format!("\n{:<35} {:>12} {:>8}\n", "Category", "Amount", "%"));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for category in &self.categories {
            output.push_str(&format!(
                "{:<35} {:>12} {:>7.1}%\n",
                category.name,
                money(category.value),
                category.percentage_of(self.summary.total)
            ));
        }

        output.push_str(&format!(
            "\n{:<35} {:>12} {:>12}\n",
            "This Month vs Last", "Current", "Previous"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for entry in &self.comparison {
            output.push_str(&format!(
                "{:<35} {:>12} {:>12}\n",
                entry.name,
                money(entry.current_period),
                money(entry.previous_period)
            ));
        }

        output.push_str("\nSpending Patterns\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        match (&self.pattern.highest_day, &self.pattern.lowest_day) {
            (Some(high), Some(low)) => {
                output.push_str(&format!("Highest: {} ({})\n", high.day, money(high.amount)));
                output.push_str(&format!("Lowest: {} ({})\n", low.day, money(low.amount)));
            }
            _ => output.push_str("No spending recorded\n"),
        }
        output.push_str(&format!(
            "Average per weekday: {}\n",
            units(self.pattern.average_daily_spending)
        ));

        output.push_str(&format!("\n{:<35} {:>12} {:>12}\n", "Forecast", "Actual", "Predicted"));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for point in &self.forecast {
            output.push_str(&format!(
                "{:<35} {:>12} {:>12}\n",
                point.key,
                point.actual.map(units).unwrap_or_default(),
                point.predicted.map(units).unwrap_or_default()
            ));
        }
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<35} {:>12}\n",
            "NEXT PERIOD ESTIMATE",
            units(self.next_period)
        ));

        output
    }
}
