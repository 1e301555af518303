//! Analytics display formatting
//!
//! Tables for period totals, category breakdowns, month comparison and
//! forecasts, plus text blocks for the weekday pattern and summary.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_bar, format_change, format_percentage};
use crate::analytics::patterns::{weekday_name, WEEKDAYS};
use crate::analytics::{
    Bucket, CategoryTotal, ComparisonEntry, ExpenseSummary, ForecastPoint, SpendingPattern,
};
use crate::models::Money;

const BAR_WIDTH: usize = 20;

fn render<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format period totals with a bar scaled to the largest period
pub fn format_bucket_table(buckets: &[Bucket], currency: &str) -> String {
    if buckets.is_empty() {
        return "No expenses in range.".to_string();
    }

    let max = buckets
        .iter()
        .map(|b| b.total.to_f64())
        .fold(0.0_f64, f64::max);

    render(buckets.iter().map(|b| BucketRow {
        period: b.key.clone(),
        total: b.total.format_with_symbol(currency),
        bar: format_bar(b.total.to_f64(), max, BAR_WIDTH),
    }))
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Format category totals with each category's share of the overall total
pub fn format_category_table(categories: &[CategoryTotal], currency: &str) -> String {
    if categories.is_empty() {
        return "No expenses in range.".to_string();
    }

    let total: Money = categories.iter().map(|c| c.value).sum();
    render(categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        amount: c.value.format_with_symbol(currency),
        share: format_percentage(c.percentage_of(total)),
    }))
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "This Month")]
    current: String,
    #[tabled(rename = "Last Month")]
    previous: String,
    #[tabled(rename = "Change")]
    change: String,
}

/// Format a this-month versus last-month comparison
pub fn format_comparison_table(entries: &[ComparisonEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No expenses this month or last month.".to_string();
    }

    render(entries.iter().map(|e| ComparisonRow {
        name: e.name.clone(),
        current: e.current_period.format_with_symbol(currency),
        previous: e.previous_period.format_with_symbol(currency),
        change: if e.previous_period.is_zero() {
            "new".to_string()
        } else {
            format_change(e.change())
        },
    }))
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Period")]
    key: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a forecast series; history rows show the actual total, projected
/// rows the prediction
pub fn format_forecast_table(points: &[ForecastPoint], currency: &str) -> String {
    if points.is_empty() {
        return "Not enough history to forecast.".to_string();
    }

    render(points.iter().map(|p| {
        let (kind, value) = if p.is_prediction() {
            ("projected", p.predicted)
        } else {
            ("actual", p.actual)
        };
        ForecastRow {
            key: p.key.clone(),
            kind,
            amount: value
                .map(|v| format!("{}{:.2}", currency, v))
                .unwrap_or_default(),
        }
    }))
}

/// Format the weekday pattern as a short text block with a bar per weekday
pub fn format_pattern(pattern: &SpendingPattern, currency: &str) -> String {
    let (Some(high), Some(low)) = (&pattern.highest_day, &pattern.lowest_day) else {
        return "No spending recorded.".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!(
        "Highest spending day: {} ({})\n",
        high.day,
        high.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Lowest spending day:  {} ({})\n",
        low.day,
        low.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Average per weekday:  {}{:.2}\n",
        currency, pattern.average_daily_spending
    ));
    output.push_str(&format!("Transactions:         {}\n\n", pattern.total_transactions));

    let max = high.amount.to_f64();
    for (day, total) in WEEKDAYS.iter().zip(pattern.weekday_totals.iter()) {
        output.push_str(&format!(
            "{:<10} {} {:>12}\n",
            weekday_name(*day),
            format_bar(total.to_f64(), max, BAR_WIDTH),
            total.format_with_symbol(currency)
        ));
    }

    output
}

/// Format the headline summary figures
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Expenses:   {}\n",
        summary.total.format_with_symbol(currency)
    ));
    output.push_str(&format!("Transactions:     {}\n", summary.count));
    output.push_str(&format!("Average Expense:  {}{:.2}\n", currency, summary.average));
    output.push_str(&format!(
        "Highest Expense:  {}\n",
        summary.highest.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Lowest Expense:   {}\n",
        summary.lowest.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "Last 30 Days:     {}\n",
        summary.last_30_days.format_with_symbol(currency)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{analyze_spending_patterns, bucket_totals, forecast};
    use crate::models::{ExpenseRecord, Granularity};
    use chrono::NaiveDate;

    fn records() -> Vec<ExpenseRecord> {
        let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        vec![
            ExpenseRecord::new("local", Money::from_units(100), "Food", date(1, 5)),
            ExpenseRecord::new("local", Money::from_units(60), "Food", date(2, 5)),
        ]
    }

    #[test]
    fn test_bucket_table() {
        let buckets = bucket_totals(&records(), Granularity::Monthly);
        let output = format_bucket_table(&buckets, "$");
        assert!(output.contains("Jan 2024"));
        assert!(output.contains("$100.00"));
        assert!(output.contains('█'));
    }

    #[test]
    fn test_comparison_marks_new_categories() {
        let entries = vec![ComparisonEntry {
            name: "Travel".into(),
            current_period: Money::from_units(20),
            previous_period: Money::zero(),
        }];
        assert!(format_comparison_table(&entries, "$").contains("new"));
    }

    #[test]
    fn test_forecast_table() {
        let buckets = bucket_totals(&records(), Granularity::Monthly);
        let output = format_forecast_table(&forecast(&buckets, 1), "$");
        assert!(output.contains("Mar 2024"));
        assert!(output.contains("$20.00"));
        assert_eq!(format_forecast_table(&[], "$"), "Not enough history to forecast.");

        let projected = output.lines().find(|l| l.contains("Mar 2024")).unwrap();
        assert!(projected.contains("projected"));
        let history = output.lines().find(|l| l.contains("Jan 2024")).unwrap();
        assert!(history.contains("actual"));
        assert!(!history.contains("projected"));
    }

    #[test]
    fn test_pattern() {
        let pattern = analyze_spending_patterns(&records());
        let output = format_pattern(&pattern, "$");
        assert!(output.contains("Highest spending day"));
        assert!(output.contains("Sunday"));

        let empty = analyze_spending_patterns(&Vec::<ExpenseRecord>::new());
        assert_eq!(format_pattern(&empty, "$"), "No spending recorded.");
    }
}
