//! # Trend Analytics
//!
//! Pure computation core for financial dashboard charts: trend smoothing,
//! anomaly detection, growth-based forecasting and chart-shaped grouping.
//! Every function takes plain slices and returns owned values, performs no
//! I/O apart from the explicit CSV helpers, and can be called concurrently
//! without coordination.
//!
//! ## Features
//!
//! - **Moving averages**: smooth jagged daily series while preserving
//!   length and dates
//! - **Anomaly detection**: flag points that stray from their local
//!   average by more than a standard-deviation threshold
//! - **Forecasting**: project a series forward by compounding its average
//!   month-over-month growth
//! - **Grouping**: transpose category breakdowns and re-bucket series at
//!   daily, weekly or monthly granularity
//! - **Money formatting**: parse and render `$1,234.56` style amounts
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use trend_analytics::{
//!     detect_anomalies, forecast_trend, moving_average, TrendPoint, DEFAULT_THRESHOLD,
//! };
//!
//! let mut series = Vec::new();
//! for day in 1..=14 {
//!     let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
//!     series.push(TrendPoint::new(date, 100.0 + day as f64));
//! }
//!
//! let smoothed = moving_average(&series, 7).unwrap();
//! assert_eq!(smoothed.len(), series.len());
//!
//! let anomalies = detect_anomalies(&series, DEFAULT_THRESHOLD).unwrap();
//! assert!(anomalies.is_empty());
//!
//! let projection = forecast_trend(&series, 3);
//! assert_eq!(projection.len(), 3);
//! ```

pub mod anomaly;
pub mod data;
pub mod error;
pub mod forecast;
pub mod grouping;
pub mod money;
pub mod trend;
pub mod utils;

// Re-export main types and functions for convenience
pub use anomaly::{detect_anomalies, DEFAULT_THRESHOLD};
pub use data::{
    load_trend_csv, write_trend_csv, AnomalyPoint, CategoryBreakdown, CategorySeries,
    Granularity, TrendBucket, TrendPoint,
};
pub use error::{AnalyticsError, Result};
pub use forecast::{forecast_trend, DEFAULT_HORIZON};
pub use grouping::{bucket_trend, group_by_category};
pub use money::{format_amount, format_percent, parse_amount};
pub use trend::{average_growth_rate, growth_rate, mean, moving_average, std_dev, DEFAULT_WINDOW};

/// Version of the trend_analytics crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
