//! Utility functions for generating and sizing trend data

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::data::TrendPoint;

/// Generate synthetic daily trend data for demos and tests
///
/// Produces a random walk of `num_points` consecutive days starting at
/// `start`: each value moves from the previous one by a uniform factor in
/// `[-volatility, +volatility]`, floored at zero so counts and amounts
/// stay meaningful.
///
/// # Arguments
///
/// * `num_points` - Number of daily points to generate
/// * `start` - Date of the first point
/// * `base_value` - Starting value of the walk
/// * `volatility` - Maximum relative day-over-day change, e.g. `0.05`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trend_analytics::utils::generate_trend_data;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let series = generate_trend_data(30, start, 100.0, 0.05);
/// assert_eq!(series.len(), 30);
/// ```
pub fn generate_trend_data(
    num_points: usize,
    start: NaiveDate,
    base_value: f64,
    volatility: f64,
) -> Vec<TrendPoint> {
    let mut rng = rand::thread_rng();
    let mut value = base_value;

    let mut series = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let date = start + Days::new(i as u64);
        let change = (rng.gen::<f64>() - 0.5) * 2.0 * volatility;
        value = (value * (1.0 + change)).max(0.0);
        series.push(TrendPoint::new(date, value));
    }

    series
}

/// Share of `total` represented by `part`, in percent rounded to one decimal
///
/// A zero total yields 0 rather than dividing by zero, so empty breakdowns
/// render as all-zero rows.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    let percent = part / total * 100.0;
    (percent * 10.0).round() / 10.0
}
