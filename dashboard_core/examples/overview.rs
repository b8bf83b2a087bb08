use chrono::NaiveDate;
use dashboard_core::invoices::{self, InvoiceSummary};
use dashboard_core::notifications::NotificationFeed;
use dashboard_core::store::CollectionStore;
use dashboard_core::utils::{
    generate_invoice_data, generate_notification_data, generate_warranty_data,
};
use dashboard_core::warranty::{claim_trend, expiring_within, WarrantySummary};
use dashboard_core::EXPIRING_SOON_DAYS;
use trend_analytics::money::format_amount;
use trend_analytics::{detect_anomalies, forecast_trend, group_by_category, DEFAULT_THRESHOLD};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dashboard Core: Overview Example");
    println!("================================\n");

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    // Simulate the fetch cycle a view goes through
    println!("Fetching records...");
    let mut warranties: CollectionStore<_> = CollectionStore::new();
    warranties.begin_load();
    warranties.load_succeeded(generate_warranty_data(120, today));

    let invoices_data = generate_invoice_data(80, today);
    let feed = NotificationFeed::new(generate_notification_data(15, today));
    println!(
        "Fetched {} warranties, {} invoices, {} notifications\n",
        warranties.items().len(),
        invoices_data.len(),
        feed.len()
    );

    // Warranty metric cards
    let warranty_summary = WarrantySummary::compute(warranties.items(), today);
    println!("{}\n", warranty_summary);

    let expiring = expiring_within(warranties.items(), today, EXPIRING_SOON_DAYS);
    println!("Expiring within {} days: {}", EXPIRING_SOON_DAYS, expiring.len());
    for record in expiring.iter().take(3) {
        println!("  {} ({}) until {}", record.id, record.product, record.expiry_date);
    }

    // Invoice totals and the pie chart feed
    let invoice_summary = InvoiceSummary::compute(&invoices_data, today);
    println!("\n{}\n", invoice_summary);

    let overdue = invoices::overdue(&invoices_data, today);
    println!("Overdue invoices: {}", overdue.len());
    for invoice in overdue.iter().take(3) {
        println!(
            "  {} {} due {}",
            invoice.id,
            format_amount(invoice.amount),
            invoice.due_on
        );
    }

    let chart = group_by_category(&invoice_summary.status_breakdown());
    println!("\nStatus chart feed: {}", chart.to_json()?);

    // Claim trend with anomaly markers and a projection
    let trend = claim_trend(warranties.items());
    println!("\nClaims per purchase month: {} points", trend.len());

    let anomalies = detect_anomalies(&trend, DEFAULT_THRESHOLD)?;
    if anomalies.is_empty() {
        println!("No claim anomalies at threshold {}", DEFAULT_THRESHOLD);
    } else {
        for anomaly in &anomalies {
            println!(
                "  anomaly {}: {:.0} claims, expected {:.1}",
                anomaly.date, anomaly.value, anomaly.expected_value
            );
        }
    }

    let projection = forecast_trend(&trend, 3);
    println!("\nProjected claims, next three months:");
    for point in &projection {
        println!("  {}: {:.1}", point.date, point.value);
    }

    // Notifications panel
    println!("\nUnread notifications: {}", feed.unread_count());
    for notification in feed.latest(3) {
        println!(
            "  [{}] {} ({})",
            notification.severity, notification.title, notification.created_at
        );
    }

    Ok(())
}
