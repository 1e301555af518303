//! Category aggregator

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseRecord, Money};

/// Total spend for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Money,
}

impl CategoryTotal {
    /// Share of `total` as a percentage; 0 when `total` is zero
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.value.cents() as f64 / total.cents() as f64 * 100.0
        }
    }
}

/// One entry per distinct category, sorted by value, largest first.
///
/// The sort is stable, so categories with equal totals keep the order in
/// which they were first encountered.
pub fn category_totals<'a, I>(records: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                name: record.category.clone(),
                value: Money::zero(),
            });
            totals.len() - 1
        });
        totals[slot].value += record.amount;
    }

    totals.sort_by(|a, b| b.value.cmp(&a.value));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(amount: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            "local",
            Money::from_units(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        )
    }

    #[test]
    fn test_sorted_descending() {
        let records = vec![
            record(100, "Food"),
            record(50, "Food"),
            record(10, "Transport"),
            record(400, "Housing"),
        ];
        let totals = category_totals(&records);

        let names: Vec<&str> = totals.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Food", "Transport"]);
        assert_eq!(totals[1].value.units(), 150);
    }

    #[test]
    fn test_totals_sum_to_record_total() {
        let records = vec![record(100, "Food"), record(-20, "Food"), record(35, "Travel")];
        let totals = category_totals(&records);

        let sum: Money = totals.iter().map(|t| t.value).sum();
        assert_eq!(sum, records.iter().map(|r| r.amount).sum::<Money>());
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let records = vec![record(150, "Transport"), record(150, "Food")];
        let totals = category_totals(&records);
        assert_eq!(totals[0].name, "Transport");
        assert_eq!(totals[1].name, "Food");
    }

    #[test]
    fn test_percentage_of() {
        let total = CategoryTotal {
            name: "Food".into(),
            value: Money::from_units(25),
        };
        assert_eq!(total.percentage_of(Money::from_units(100)), 25.0);
        assert_eq!(total.percentage_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_empty() {
        let records: Vec<ExpenseRecord> = Vec::new();
        assert!(category_totals(&records).is_empty());
    }
}
