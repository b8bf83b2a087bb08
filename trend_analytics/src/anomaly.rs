//! Anomaly detection for trend series
//!
//! Flags observations that sit unusually far from their local moving
//! average, measured in units of the series' own standard deviation. The
//! dashboard uses this to call out claim spikes and billing outliers.

use crate::data::{AnomalyPoint, TrendPoint};
use crate::error::{AnalyticsError, Result};
use crate::trend::{moving_average, std_dev, DEFAULT_WINDOW};

/// Default deviation threshold, in standard deviations
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Detect anomalous points in a trend series
///
/// Each observation is compared against a moving average over
/// [`DEFAULT_WINDOW`] observations. Points whose distance from that
/// expected value exceeds `threshold` standard deviations are returned,
/// in input order. The spread is the standard deviation of the whole
/// series, so a short or empty series simply yields no anomalies.
///
/// # Arguments
///
/// * `series` - Series to scan, in chronological order
/// * `threshold` - How many standard deviations away counts as anomalous,
///   must be a positive finite number
pub fn detect_anomalies(series: &[TrendPoint], threshold: f64) -> Result<Vec<AnomalyPoint>> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(AnalyticsError::InvalidParameter(format!(
            "Threshold must be a positive finite number, got {}",
            threshold
        )));
    }

    if series.is_empty() {
        return Ok(Vec::new());
    }

    let expected = moving_average(series, DEFAULT_WINDOW)?;
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let spread = std_dev(&values)?;

    let mut anomalies = Vec::new();
    for (point, smoothed) in series.iter().zip(expected.iter()) {
        let deviation = deviation_score(point.value, smoothed.value, spread);
        if deviation > threshold {
            anomalies.push(AnomalyPoint {
                date: point.date,
                value: point.value,
                expected_value: smoothed.value,
                deviation,
            });
        }
    }

    Ok(anomalies)
}

/// Distance between an observation and its expected value, in spreads
///
/// A flat series has zero spread, which would make the score 0/0. In that
/// case a matching observation scores 0 and any mismatch scores infinite,
/// so the caller never sees NaN.
fn deviation_score(value: f64, expected: f64, spread: f64) -> f64 {
    if spread == 0.0 {
        if value == expected {
            return 0.0;
        }
        return f64::INFINITY;
    }

    (value - expected).abs() / spread
}
