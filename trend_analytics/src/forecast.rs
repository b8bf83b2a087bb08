//! Growth-based trend projection
//!
//! Projects a series forward by compounding its average month-over-month
//! growth rate. This is deliberately naive: the dashboard shows it as a
//! dotted continuation of the historical line, not as a model fit.

use chrono::Months;

use crate::data::TrendPoint;
use crate::trend::average_growth_rate;

/// Default projection horizon, in months
pub const DEFAULT_HORIZON: usize = 12;

/// Project a trend series `periods` months past its last observation
///
/// The average growth rate across all consecutive pairs is compounded off
/// the last actual value, so period k carries
/// `last * (1 + rate/100)^k`. Dates advance by whole calendar months from
/// the anchor date, clamping the day when a month is shorter (a Jan 31
/// anchor projects to Feb 29 in a leap year, then back to Mar 31).
///
/// A series with fewer than two points has no growth rate to extend and
/// yields an empty projection.
pub fn forecast_trend(series: &[TrendPoint], periods: usize) -> Vec<TrendPoint> {
    if series.len() < 2 {
        return Vec::new();
    }

    let avg_rate = average_growth_rate(series);
    let anchor = &series[series.len() - 1];

    let mut projection = Vec::with_capacity(periods);
    for k in 1..=periods {
        let date = match anchor.date.checked_add_months(Months::new(k as u32)) {
            Some(date) => date,
            None => break,
        };
        let value = anchor.value * (1.0 + avg_rate / 100.0).powi(k as i32);
        projection.push(TrendPoint::new(date, value));
    }

    projection
}
