//! Category grouping and trend re-bucketing
//!
//! Two reshaping steps sit between raw series and the charts: transposing
//! category breakdowns into the parallel-array form chart axes want, and
//! collapsing daily observations into weekly or monthly buckets.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::data::{CategoryBreakdown, CategorySeries, Granularity, TrendBucket, TrendPoint};

/// Transpose a category breakdown into parallel label/value/percentage columns
///
/// Rows keep their input order and are not de-duplicated; two slices with
/// the same label stay two columns. An empty breakdown yields three empty
/// vectors.
pub fn group_by_category(breakdown: &[CategoryBreakdown]) -> CategorySeries {
    let mut labels = Vec::with_capacity(breakdown.len());
    let mut values = Vec::with_capacity(breakdown.len());
    let mut percentages = Vec::with_capacity(breakdown.len());

    for slice in breakdown {
        labels.push(slice.category.clone());
        values.push(slice.amount);
        percentages.push(slice.percentage);
    }

    CategorySeries {
        labels,
        values,
        percentages,
    }
}

/// Re-bucket a trend series at the given granularity
///
/// Daily granularity passes every point through as its own bucket. Weekly
/// buckets are keyed by the Sunday starting the observation's week, monthly
/// buckets by the `YYYY-MM` label; values sharing a key are summed.
///
/// Buckets appear in first-occurrence order of their keys, so an unsorted
/// input yields unsorted buckets.
pub fn bucket_trend(series: &[TrendPoint], granularity: Granularity) -> Vec<TrendBucket> {
    match granularity {
        Granularity::Daily => series
            .iter()
            .map(|point| TrendBucket::new(point.date.to_string(), point.value))
            .collect(),
        Granularity::Weekly => sum_by_key(series, |point| week_start(point.date).to_string()),
        Granularity::Monthly => sum_by_key(series, |point| month_key(point.date)),
    }
}

/// Sum series values into buckets keyed by `key_fn`, preserving first-occurrence order
fn sum_by_key<F>(series: &[TrendPoint], key_fn: F) -> Vec<TrendBucket>
where
    F: Fn(&TrendPoint) -> String,
{
    let mut buckets: Vec<TrendBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for point in series {
        let key = key_fn(point);
        if let Some(&slot) = index.get(&key) {
            buckets[slot].value += point.value;
        } else {
            index.insert(key.clone(), buckets.len());
            buckets.push(TrendBucket::new(key, point.value));
        }
    }

    buckets
}

/// The Sunday on or before the given date
fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date - Days::new(offset)
}

/// Year-month label in `YYYY-MM` form
fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
