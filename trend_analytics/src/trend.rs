//! Trend smoothing and growth statistics
//!
//! The functions here are the arithmetic core of the dashboard: simple
//! moving averages for smoothing jagged daily series, population standard
//! deviation for spread, and period-over-period growth rates.

use crate::data::TrendPoint;
use crate::error::{AnalyticsError, Result};

/// Default smoothing window, in observations (one week of daily data)
pub const DEFAULT_WINDOW: usize = 7;

/// Smooth a trend series with a simple moving average
///
/// Each output point keeps its input date. Once `window` observations are
/// available, the value becomes the mean of the trailing window; earlier
/// points are copied through unchanged so the output always has the same
/// length as the input. A series shorter than the window is returned as-is.
///
/// # Arguments
///
/// * `series` - Series to smooth, in chronological order
/// * `window` - Number of trailing observations to average, must be positive
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trend_analytics::{moving_average, TrendPoint};
///
/// let series: Vec<TrendPoint> = (1..=5)
///     .map(|d| TrendPoint::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap(), d as f64))
///     .collect();
///
/// let smoothed = moving_average(&series, 3).unwrap();
/// assert_eq!(smoothed.len(), series.len());
/// assert_eq!(smoothed[4].value, 4.0);
/// ```
pub fn moving_average(series: &[TrendPoint], window: usize) -> Result<Vec<TrendPoint>> {
    if window == 0 {
        return Err(AnalyticsError::InvalidParameter(
            "Window size must be greater than 0".to_string(),
        ));
    }

    if series.len() < window {
        return Ok(series.to_vec());
    }

    let mut smoothed = Vec::with_capacity(series.len());
    for (i, point) in series.iter().enumerate() {
        if i + 1 < window {
            // Not enough history yet, keep the raw observation
            smoothed.push(point.clone());
        } else {
            let sum: f64 = series[i + 1 - window..=i].iter().map(|p| p.value).sum();
            smoothed.push(TrendPoint::new(point.date, sum / window as f64));
        }
    }

    Ok(smoothed)
}

/// Calculate the arithmetic mean of a set of values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalyticsError::InsufficientData(
            "Cannot calculate mean of an empty series".to_string(),
        ));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Calculate the population standard deviation of a set of values
///
/// The variance divides by `n` rather than `n - 1`, treating the series
/// as the whole population. A single observation therefore yields 0.
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    Ok(variance.sqrt())
}

/// Calculate the period-over-period growth rate, in percent
///
/// A zero baseline would divide by zero, so it reports 0 growth instead.
/// This keeps series that start from nothing (a first month of claims, a
/// first invoice) from blowing up the averages downstream.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }

    (current - previous) / previous * 100.0
}

/// Calculate the mean growth rate across consecutive points of a series
///
/// Returns 0 for a series with fewer than two points.
pub fn average_growth_rate(series: &[TrendPoint]) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }

    let total: f64 = series
        .windows(2)
        .map(|pair| growth_rate(pair[1].value, pair[0].value))
        .sum();

    total / (series.len() - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from(values: &[f64]) -> Vec<TrendPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap();
                TrendPoint::new(date, value)
            })
            .collect()
    }

    #[test]
    fn test_moving_average_short_series_unchanged() {
        let series = series_from(&[10.0, 20.0, 30.0]);
        let smoothed = moving_average(&series, 7).unwrap();
        assert_eq!(smoothed, series);
    }

    #[test]
    fn test_moving_average_window_three() {
        let series = series_from(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let smoothed = moving_average(&series, 3).unwrap();

        // First window - 1 points are copied through
        assert_eq!(smoothed[0].value, 10.0);
        assert_eq!(smoothed[1].value, 20.0);
        // From index 2 on, the trailing mean takes over
        assert_eq!(smoothed[2].value, 20.0);
        assert_eq!(smoothed[3].value, 30.0);
        assert_eq!(smoothed[4].value, 40.0);
    }

    #[test]
    fn test_moving_average_keeps_dates() {
        let series = series_from(&[10.0, 20.0, 30.0, 40.0]);
        let smoothed = moving_average(&series, 2).unwrap();
        for (raw, smooth) in series.iter().zip(smoothed.iter()) {
            assert_eq!(raw.date, smooth.date);
        }
    }

    #[test]
    fn test_moving_average_window_one_is_identity() {
        let series = series_from(&[5.0, 7.0, 9.0]);
        let smoothed = moving_average(&series, 1).unwrap();
        assert_eq!(smoothed, series);
    }

    #[test]
    fn test_moving_average_zero_window() {
        let series = series_from(&[1.0, 2.0]);
        let result = moving_average(&series, 0);
        assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));
    }

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values).unwrap(), 5.0);
        // Classic population example with a spread of exactly 2
        assert_eq!(std_dev(&values).unwrap(), 2.0);
    }

    #[test]
    fn test_std_dev_constant_series_is_zero() {
        let values = [3.0, 3.0, 3.0, 3.0];
        assert_eq!(std_dev(&values).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_empty_series() {
        let result = std_dev(&[]);
        assert!(matches!(result, Err(AnalyticsError::InsufficientData(_))));
    }

    #[test]
    fn test_growth_rate() {
        assert_eq!(growth_rate(110.0, 100.0), 10.0);
        assert_eq!(growth_rate(90.0, 100.0), -10.0);
        assert_eq!(growth_rate(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_growth_rate_zero_baseline() {
        assert_eq!(growth_rate(50.0, 0.0), 0.0);
        assert_eq!(growth_rate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_average_growth_rate() {
        // 100 -> 110 is +10%, 110 -> 99 is -10%
        let series = series_from(&[100.0, 110.0, 99.0]);
        assert_eq!(average_growth_rate(&series), 0.0);
    }

    #[test]
    fn test_average_growth_rate_short_series() {
        assert_eq!(average_growth_rate(&[]), 0.0);
        assert_eq!(average_growth_rate(&series_from(&[42.0])), 0.0);
    }
}
