//! Time granularity and bucket key derivation
//!
//! Bucket keys are user-facing strings whose exact shape is fixed:
//!
//! | granularity | key         | example     |
//! |-------------|-------------|-------------|
//! | daily       | `M/D/YYYY`  | `3/7/2024`  |
//! | weekly      | `M/D/YYYY`  | Sunday that starts the week |
//! | monthly     | `Mon YYYY`  | `Mar 2024`  |
//! | yearly      | `YYYY`      | `2024`      |

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed English month abbreviations used in monthly keys
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Time unit used to partition expenses into buckets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Granularity {
    /// The first calendar day of the period containing `date`
    pub fn period_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => week_start(date),
            Self::Monthly => date.with_day(1).unwrap_or(date),
            Self::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        }
    }

    /// Derive the bucket key for a record dated `date`
    pub fn key_for(&self, date: NaiveDate) -> String {
        let start = self.period_start(date);
        match self {
            Self::Daily | Self::Weekly => format_day_key(start),
            Self::Monthly => format_month_key(start),
            Self::Yearly => start.year().to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            other => Err(format!("Unknown granularity: {}", other)),
        }
    }
}

/// The Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// `M/D/YYYY` with unpadded month and day
pub fn format_day_key(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// `Mon YYYY` from the fixed abbreviation table
pub fn format_month_key(date: NaiveDate) -> String {
    format!(
        "{} {}",
        MONTH_ABBREVIATIONS[date.month0() as usize],
        date.year()
    )
}
