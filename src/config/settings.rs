//! User settings for expense-insights
//!
//! Persisted as `config.json` under the base directory. Every field has a
//! serde default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::InsightsPaths;
use crate::analytics::trend::DEFAULT_FORECAST_HORIZON;
use crate::error::InsightsError;
use crate::logging::DEFAULT_LOG_FILTER;
use crate::models::Granularity;

/// How strictly new expense records are checked before they are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Positive amount, 3-100 character description, category, no future dates
    #[default]
    Strict,
    /// Only a category is required (allows refunds and credits)
    Permissive,
}

/// User settings for expense-insights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Owner whose records are read and written
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Granularity used when none is given on the command line
    #[serde(default)]
    pub default_granularity: Granularity,

    /// Number of future periods to forecast
    #[serde(default = "default_forecast_horizon")]
    pub forecast_horizon: usize,

    /// Length of the default reporting window, ending today
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,

    /// Currency symbol used for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Validation applied when records are added or imported
    #[serde(default)]
    pub validation: ValidationPolicy,

    /// Tracing filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_owner() -> String {
    "local".to_string()
}

fn default_forecast_horizon() -> usize {
    DEFAULT_FORECAST_HORIZON
}

fn default_range_days() -> u32 {
    30
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            owner: default_owner(),
            default_granularity: Granularity::default(),
            forecast_horizon: default_forecast_horizon(),
            default_range_days: default_range_days(),
            currency_symbol: default_currency(),
            validation: ValidationPolicy::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &InsightsPaths) -> Result<Self, InsightsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                InsightsError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                InsightsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InsightsPaths) -> Result<(), InsightsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            InsightsError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            InsightsError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
