use chrono::Days;
use rstest::rstest;
use trend_analytics::data::TrendPoint;
use trend_analytics::error::AnalyticsError;
use trend_analytics::trend::{
    average_growth_rate, growth_rate, mean, moving_average, std_dev, DEFAULT_WINDOW,
};

fn create_test_series(values: &[f64]) -> Vec<TrendPoint> {
    let start: chrono::NaiveDate = "2024-01-01".parse().unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| TrendPoint::new(start + Days::new(i as u64), value))
        .collect()
}

#[rstest]
#[case(110.0, 100.0, 10.0)]
#[case(90.0, 100.0, -10.0)]
#[case(200.0, 100.0, 100.0)]
#[case(75.0, 150.0, -50.0)]
#[case(100.0, 100.0, 0.0)]
#[case(50.0, 0.0, 0.0)]
#[case(0.0, 0.0, 0.0)]
#[case(-50.0, 0.0, 0.0)]
fn test_growth_rate_cases(#[case] current: f64, #[case] previous: f64, #[case] expected: f64) {
    assert_eq!(growth_rate(current, previous), expected);
}

#[rstest]
#[case(4)]
#[case(7)]
#[case(100)]
fn test_moving_average_identity_below_window(#[case] window: usize) {
    let series = create_test_series(&[10.0, 20.0, 30.0]);
    let smoothed = moving_average(&series, window).unwrap();
    assert_eq!(smoothed, series);
}

#[test]
fn test_moving_average_window_mean_on_ramp() {
    let values: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let series = create_test_series(&values);

    let smoothed = moving_average(&series, DEFAULT_WINDOW).unwrap();
    assert_eq!(smoothed.len(), series.len());

    // Before the window fills up, values pass through untouched
    for i in 0..DEFAULT_WINDOW - 1 {
        assert_eq!(smoothed[i].value, series[i].value);
    }
    // From there on, each value is the trailing seven-point mean
    assert_eq!(smoothed[6].value, 4.0);
    assert_eq!(smoothed[7].value, 5.0);
    assert_eq!(smoothed[9].value, 7.0);
}

#[test]
fn test_moving_average_rejects_zero_window() {
    let series = create_test_series(&[1.0, 2.0, 3.0]);
    let result = moving_average(&series, 0);

    match result {
        Err(AnalyticsError::InvalidParameter(msg)) => {
            assert!(msg.contains("Window size"));
        }
        _ => panic!("Expected InvalidParameter variant"),
    }
}

#[test]
fn test_moving_average_empty_series() {
    let smoothed = moving_average(&[], 5).unwrap();
    assert!(smoothed.is_empty());
}

#[rstest]
#[case(0.0)]
#[case(42.5)]
#[case(-7.0)]
fn test_std_dev_constant_sequence_is_zero(#[case] value: f64) {
    let values = vec![value; 12];
    assert_eq!(std_dev(&values).unwrap(), 0.0);
}

#[test]
fn test_std_dev_population_formula() {
    // Mean 5, squared deviations sum 32, population variance 4
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(std_dev(&values).unwrap(), 2.0);
}

#[test]
fn test_std_dev_single_value_is_zero() {
    assert_eq!(std_dev(&[42.0]).unwrap(), 0.0);
}

#[test]
fn test_mean_and_std_dev_reject_empty_input() {
    assert!(matches!(
        mean(&[]),
        Err(AnalyticsError::InsufficientData(_))
    ));
    assert!(matches!(
        std_dev(&[]),
        Err(AnalyticsError::InsufficientData(_))
    ));
}

#[test]
fn test_average_growth_rate_mixes_pairs() {
    // +10% then -10% average out to zero
    let series = create_test_series(&[100.0, 110.0, 99.0]);
    assert_eq!(average_growth_rate(&series), 0.0);

    // A zero baseline contributes zero growth, not infinity
    let series = create_test_series(&[0.0, 50.0, 100.0]);
    assert_eq!(average_growth_rate(&series), 50.0);
}
