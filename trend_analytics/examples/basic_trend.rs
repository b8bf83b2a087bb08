use chrono::{Days, NaiveDate};
use trend_analytics::data::{CategoryBreakdown, Granularity, TrendPoint};
use trend_analytics::money::{format_amount, format_percent};
use trend_analytics::utils::percentage_of;
use trend_analytics::{
    bucket_trend, detect_anomalies, forecast_trend, group_by_category, growth_rate,
    moving_average, DEFAULT_THRESHOLD, DEFAULT_WINDOW,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Trend Analytics: Basic Walkthrough");
    println!("==================================\n");

    // Create sample data
    println!("Creating 90 days of warranty claim counts...");
    let series = create_sample_claims();
    println!("Sample data created: {} daily points\n", series.len());

    // Smooth the series
    let smoothed = moving_average(&series, DEFAULT_WINDOW)?;
    println!("Seven-day moving average (last 5 days):");
    for (raw, smooth) in series.iter().zip(smoothed.iter()).rev().take(5).rev() {
        println!(
            "  {}: raw {:>6.1}, smoothed {:>6.1}",
            raw.date, raw.value, smooth.value
        );
    }

    // Scan for anomalies
    let anomalies = detect_anomalies(&series, DEFAULT_THRESHOLD)?;
    println!("\nAnomalies above {} standard deviations:", DEFAULT_THRESHOLD);
    for anomaly in &anomalies {
        println!(
            "  {}: value {:.1}, expected {:.1}, deviation {:.2}",
            anomaly.date, anomaly.value, anomaly.expected_value, anomaly.deviation
        );
    }

    // Re-bucket for the charts
    let weekly = bucket_trend(&series, Granularity::Weekly);
    println!("\nWeekly claim totals (first 4 weeks):");
    for bucket in weekly.iter().take(4) {
        println!("  week of {}: {:.0} claims", bucket.period, bucket.value);
    }

    let monthly = bucket_trend(&series, Granularity::Monthly);
    println!("\nMonthly claim totals:");
    for bucket in &monthly {
        println!("  {}: {:.0} claims", bucket.period, bucket.value);
    }
    if monthly.len() >= 2 {
        let latest = &monthly[monthly.len() - 1];
        let previous = &monthly[monthly.len() - 2];
        println!(
            "  month-over-month: {}",
            format_percent(growth_rate(latest.value, previous.value))
        );
    }

    // Project six months ahead
    let projection = forecast_trend(&series, 6);
    println!("\nSix-month projection from the last observation:");
    for point in &projection {
        println!("  {}: {:.1}", point.date, point.value);
    }

    // Build the chart feed for a cost breakdown
    let costs = [("Repairs", 4800.0), ("Replacements", 3150.0), ("Refunds", 2050.0)];
    let total: f64 = costs.iter().map(|(_, amount)| amount).sum();
    let breakdown: Vec<CategoryBreakdown> = costs
        .iter()
        .map(|&(category, amount)| {
            CategoryBreakdown::new(category, amount, percentage_of(amount, total))
        })
        .collect();

    let chart = group_by_category(&breakdown);
    println!("\nWarranty cost breakdown ({} total):", format_amount(total));
    for i in 0..chart.len() {
        println!(
            "  {:<13} {:>10}  {:>5.1}%",
            chart.labels[i],
            format_amount(chart.values[i]),
            chart.percentages[i]
        );
    }
    println!("\nChart feed JSON: {}", chart.to_json()?);

    Ok(())
}

/// Create sample claim counts with a mild upward trend, weekly seasonality
/// and two injected incident spikes
fn create_sample_claims() -> Vec<TrendPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut series = Vec::with_capacity(90);
    for i in 0..90u64 {
        let date = start + Days::new(i);

        // Slow upward drift with a weekend dip
        let trend = 40.0 + i as f64 * 0.2;
        let weekday_factor = ((i % 7) as f64 * std::f64::consts::PI / 7.0).sin() * 5.0;
        let noise = (i as f64 * 0.7).sin() * 2.0;

        let mut value = trend + weekday_factor + noise;

        // Two recall incidents that should show up as anomalies
        if i == 40 || i == 71 {
            value += 120.0;
        }

        series.push(TrendPoint::new(date, value));
    }

    series
}
