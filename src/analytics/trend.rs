//! Linear trend fitting and forecasting
//!
//! Fits `amount ≈ slope * index + intercept` by ordinary least squares over
//! a bucketed series, indexing points by position (0..n-1) rather than by
//! date. All arithmetic is `f64` and nothing is rounded here; rounding is a
//! display concern.

use chrono::Months;
use serde::{Deserialize, Serialize};

use super::buckets::Bucket;
use crate::models::granularity::format_month_key;

/// Number of future periods forecast when none is requested
pub const DEFAULT_FORECAST_HORIZON: usize = 3;

/// A fitted straight line
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Closed-form least squares over `values`, indexed 0..n-1.
    ///
    /// Fewer than two points carry no trend and give `{ slope: 0, intercept: 0 }`.
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len();
        if n < 2 {
            return Self::default();
        }

        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let n = n as f64;
        // Non-zero for n >= 2 since the indices are distinct
        let denominator = n * sum_xx - sum_x * sum_x;
        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        Self { slope, intercept }
    }

    /// Fit over bucket totals in currency units
    pub fn from_buckets(buckets: &[Bucket]) -> Self {
        Self::fit(&bucket_values(buckets))
    }

    /// The model's value at position `index`
    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

/// One point of a forecast chart: history carries `actual`, the projection
/// carries `predicted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub key: String,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

impl ForecastPoint {
    pub fn is_prediction(&self) -> bool {
        self.predicted.is_some()
    }
}

/// Echo the history and append `horizon` projected periods.
///
/// Projected keys are `Mon YYYY`, advancing the last bucket's start date one
/// month per step. The projection for step `j` (0-based) is the model's value
/// at index `n + j`. An empty history yields an empty series.
pub fn forecast(buckets: &[Bucket], horizon: usize) -> Vec<ForecastPoint> {
    let Some(last) = buckets.last() else {
        return Vec::new();
    };

    let model = TrendModel::from_buckets(buckets);
    let n = buckets.len();

    let history = buckets.iter().map(|b| ForecastPoint {
        key: b.key.clone(),
        actual: Some(b.total.to_f64()),
        predicted: None,
    });

    let projection = (0..horizon).map(|j| {
        let date = last
            .start
            .checked_add_months(Months::new(j as u32 + 1))
            .unwrap_or(last.start);
        ForecastPoint {
            key: format_month_key(date),
            actual: None,
            predicted: Some(model.predict(n + j)),
        }
    });

    history.chain(projection).collect()
}

/// The single next-period value, `intercept + slope * n`
pub fn predict_next_period(buckets: &[Bucket]) -> f64 {
    TrendModel::from_buckets(buckets).predict(buckets.len())
}

fn bucket_values(buckets: &[Bucket]) -> Vec<f64> {
    buckets.iter().map(|b| b.total.to_f64()).collect()
}
