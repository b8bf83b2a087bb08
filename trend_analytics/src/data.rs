//! Core data types for trend analytics
//!
//! The dashboard charts consume three shapes of data: dated series points,
//! category slices and aggregated trend buckets. All of them serialize to
//! the JSON forms the chart layer expects.

use std::fmt;
use std::fs::File;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};

/// A single dated observation in a trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed value (claim count, invoice total, etc.)
    pub value: f64,
}

impl TrendPoint {
    /// Create a new trend point
    pub fn new(date: NaiveDate, value: f64) -> Self {
        TrendPoint { date, value }
    }
}

/// One labeled slice of a category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Category label as shown in chart legends
    pub category: String,
    /// Absolute amount for the category
    pub amount: f64,
    /// Share of the total, in percent
    pub percentage: f64,
}

impl CategoryBreakdown {
    /// Create a new category slice
    pub fn new(category: impl Into<String>, amount: f64, percentage: f64) -> Self {
        CategoryBreakdown {
            category: category.into(),
            amount,
            percentage,
        }
    }
}

/// Column-oriented view of a category breakdown
///
/// Chart libraries take labels and values as parallel arrays, so this is
/// the transposed form of a `Vec<CategoryBreakdown>`. Index `i` of each
/// vector describes the same category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    /// Category labels, in input order
    pub labels: Vec<String>,
    /// Absolute amounts, parallel to `labels`
    pub values: Vec<f64>,
    /// Percentage shares, parallel to `labels`
    pub percentages: Vec<f64>,
}

impl CategorySeries {
    /// Number of categories in the series
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series holds no categories
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Serialize the series to a JSON string for chart consumption
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A point flagged as anomalous within a trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Date of the anomalous observation
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
    /// Smoothed value the observation was compared against
    pub expected_value: f64,
    /// Distance from the expected value, in standard deviations
    pub deviation: f64,
}

/// An aggregated bucket of a trend series
///
/// Daily buckets carry an ISO date (`2024-01-05`), weekly buckets the date
/// of the Sunday that starts the week, and monthly buckets a `YYYY-MM`
/// label. Keeping the period as a string lets all three share one chart
/// axis type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// Period label for the bucket
    pub period: String,
    /// Sum of the values that fell into the bucket
    pub value: f64,
}

impl TrendBucket {
    /// Create a new bucket
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        TrendBucket {
            period: period.into(),
            value,
        }
    }
}

/// Granularity for bucketing a trend series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per observation
    Daily,
    /// One bucket per week, starting on Sunday
    Weekly,
    /// One bucket per calendar month
    Monthly,
}

impl Granularity {
    /// Lowercase name of the granularity
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Daily
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "daily" | "day" | "d" => Ok(Granularity::Daily),
            "weekly" | "week" | "w" => Ok(Granularity::Weekly),
            "monthly" | "month" | "m" => Ok(Granularity::Monthly),
            _ => Err(AnalyticsError::InvalidParameter(format!(
                "Unsupported granularity: {}",
                s
            ))),
        }
    }
}

/// Load a trend series from a CSV file with `date,value` columns
///
/// # Arguments
///
/// * `path` - Path to the CSV file
///
/// # Returns
///
/// * `Result<Vec<TrendPoint>>` - The loaded series, in file order
pub fn load_trend_csv(path: &str) -> Result<Vec<TrendPoint>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut series = Vec::new();
    for (i, row) in reader.deserialize::<TrendPoint>().enumerate() {
        // Line 1 is the header, so data row i sits on line i + 2
        let point = row.map_err(|e| {
            AnalyticsError::ParseError(format!("Invalid row at line {}: {}", i + 2, e))
        })?;
        series.push(point);
    }

    if series.is_empty() {
        return Err(AnalyticsError::ParseError(format!(
            "No trend points found in {}",
            path
        )));
    }

    Ok(series)
}

/// Write a trend series to a CSV file with `date,value` columns
///
/// # Arguments
///
/// * `path` - Path of the file to create
/// * `series` - Series to write, one row per point
pub fn write_trend_csv(path: &str, series: &[TrendPoint]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for point in series {
        writer.serialize(point)?;
    }
    writer.flush()?;

    Ok(())
}
