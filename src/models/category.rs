//! Expense categories and the category filter
//!
//! Categories are free-form labels on each record, treated as categorical
//! keys by the aggregators. The predefined list is what the CLI offers and
//! what strict validation expects people to pick from, but records carrying
//! other labels are still aggregated normally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Labels offered when recording an expense
pub const PREDEFINED_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Healthcare",
    "Housing",
    "Utilities",
    "Education",
    "Travel",
    "Other",
];

/// Find the predefined label matching `name`, ignoring case
pub fn canonical_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    PREDEFINED_CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

/// Restricts aggregation to one category, or none
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    /// Exact label comparison; `All` matches everything
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `"all"` (any case) or an empty string means no filter; anything else
    /// is taken as a category label, normalised to a predefined label when
    /// one matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let label = canonical_category(s).map(str::to_string).unwrap_or_else(|| s.to_string());
        Ok(Self::Only(label))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches("Travel"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn test_only_is_exact() {
        let filter = CategoryFilter::only("Travel");
        assert!(filter.matches("Travel"));
        assert!(!filter.matches("travel"));
        assert!(!filter.matches("Shopping"));
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "food & dining".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::only("Food & Dining")
        );
        assert_eq!(
            "Groceries".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::only("Groceries")
        );
    }
}
