use assert_approx_eq::assert_approx_eq;
use chrono::NaiveDate;
use trend_analytics::data::TrendPoint;
use trend_analytics::forecast::{forecast_trend, DEFAULT_HORIZON};

fn point(date: &str, value: f64) -> TrendPoint {
    TrendPoint::new(date.parse().unwrap(), value)
}

#[test]
fn test_two_point_reference_projection() {
    let series = vec![point("2024-01-01", 100.0), point("2024-02-01", 110.0)];

    let projection = forecast_trend(&series, 1);
    assert_eq!(projection.len(), 1);
    assert_eq!(projection[0].date, "2024-03-01".parse::<NaiveDate>().unwrap());
    assert_approx_eq!(projection[0].value, 121.0);
}

#[test]
fn test_projection_compounds_each_period() {
    let series = vec![point("2024-01-01", 100.0), point("2024-02-01", 110.0)];

    let projection = forecast_trend(&series, 3);
    assert_approx_eq!(projection[0].value, 121.0);
    assert_approx_eq!(projection[1].value, 133.1);
    assert_approx_eq!(projection[2].value, 146.41);
}

#[test]
fn test_default_horizon_spans_a_year() {
    let series = vec![point("2024-01-15", 200.0), point("2024-02-15", 210.0)];

    let projection = forecast_trend(&series, DEFAULT_HORIZON);
    assert_eq!(projection.len(), 12);
    assert_eq!(projection[0].date, "2024-03-15".parse::<NaiveDate>().unwrap());
    assert_eq!(projection[11].date, "2025-02-15".parse::<NaiveDate>().unwrap());
}

#[test]
fn test_dates_roll_across_year_end() {
    let series = vec![point("2024-10-15", 100.0), point("2024-11-15", 100.0)];

    let projection = forecast_trend(&series, 3);
    assert_eq!(projection[0].date, "2024-12-15".parse::<NaiveDate>().unwrap());
    assert_eq!(projection[1].date, "2025-01-15".parse::<NaiveDate>().unwrap());
    assert_eq!(projection[2].date, "2025-02-15".parse::<NaiveDate>().unwrap());
}

#[test]
fn test_month_end_anchor_clamps() {
    let series = vec![point("2023-12-31", 100.0), point("2024-01-31", 100.0)];

    let projection = forecast_trend(&series, 3);
    assert_eq!(projection[0].date, "2024-02-29".parse::<NaiveDate>().unwrap());
    assert_eq!(projection[1].date, "2024-03-31".parse::<NaiveDate>().unwrap());
    assert_eq!(projection[2].date, "2024-04-30".parse::<NaiveDate>().unwrap());
}

#[test]
fn test_short_series_yields_empty_projection() {
    assert!(forecast_trend(&[], 12).is_empty());
    assert!(forecast_trend(&[point("2024-01-01", 100.0)], 12).is_empty());
}

#[test]
fn test_zero_periods_yields_empty_projection() {
    let series = vec![point("2024-01-01", 100.0), point("2024-02-01", 110.0)];
    assert!(forecast_trend(&series, 0).is_empty());
}

#[test]
fn test_zero_baseline_pairs_contribute_no_growth() {
    // growth from 0 to 50 counts as 0%, from 50 to 100 as 100%
    let series = vec![
        point("2024-01-01", 0.0),
        point("2024-02-01", 50.0),
        point("2024-03-01", 100.0),
    ];

    let projection = forecast_trend(&series, 1);
    assert_approx_eq!(projection[0].value, 150.0);
}

#[test]
fn test_declining_series_decays_toward_zero() {
    let series = vec![point("2024-01-01", 100.0), point("2024-02-01", 50.0)];

    let projection = forecast_trend(&series, 4);
    assert_approx_eq!(projection[0].value, 25.0);
    assert_approx_eq!(projection[3].value, 3.125);
    for window in projection.windows(2) {
        assert!(window[1].value < window[0].value);
    }
}
