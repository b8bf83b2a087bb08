//! Sample data generators for demos and tests
//!
//! Shapes follow what the REST layer serves in production: plausible
//! dates around a reference day, skewed status mixes and human-readable
//! ids. Values are random, so tests assert shape rather than content.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::{Invoice, InvoiceStatus, Notification, Severity, WarrantyRecord};

const PRODUCTS: [&str; 6] = [
    "Dishwasher",
    "Refrigerator",
    "Washing Machine",
    "Dryer",
    "Microwave",
    "Oven",
];

const CUSTOMERS: [&str; 5] = [
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Retail",
    "Stark Appliances",
];

/// Generate plausible warranty records around a reference date
///
/// Purchases fall within the last two years; coverage runs one or two
/// years, so the set mixes active, expiring and expired warranties.
///
/// # Arguments
/// * `count` - Number of records to generate
/// * `today` - Reference date the purchase dates are scattered behind
pub fn generate_warranty_data(count: usize, today: NaiveDate) -> Vec<WarrantyRecord> {
    let mut rng = rand::thread_rng();

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let age_days = rng.gen_range(0..730u64);
        let purchase_date = today - Days::new(age_days);

        let coverage_days = if rng.gen_bool(0.5) { 365 } else { 730 };
        let expiry_date = purchase_date + Days::new(coverage_days);

        records.push(WarrantyRecord {
            id: format!("WTY-{:04}", i + 1),
            product: PRODUCTS[rng.gen_range(0..PRODUCTS.len())].to_string(),
            purchase_date,
            expiry_date,
            claim_count: rng.gen_range(0..5),
        });
    }

    records
}

/// Generate plausible invoices around a reference date
///
/// Issue dates fall within the last six months with net-30 due dates and
/// a status mix skewed toward sent and paid.
pub fn generate_invoice_data(count: usize, today: NaiveDate) -> Vec<Invoice> {
    let mut rng = rand::thread_rng();

    let mut invoices = Vec::with_capacity(count);
    for i in 0..count {
        let issued_on = today - Days::new(rng.gen_range(0..180u64));
        let due_on = issued_on + Days::new(30);

        let status = match rng.gen_range(0..100) {
            0..=14 => InvoiceStatus::Draft,
            15..=49 => InvoiceStatus::Sent,
            50..=84 => InvoiceStatus::Paid,
            _ => InvoiceStatus::Overdue,
        };

        let amount = (rng.gen_range(100.0..5000.0f64) * 100.0).round() / 100.0;

        invoices.push(Invoice {
            id: format!("INV-{:04}", i + 1),
            customer: CUSTOMERS[rng.gen_range(0..CUSTOMERS.len())].to_string(),
            amount,
            status,
            issued_on,
            due_on,
        });
    }

    invoices
}

/// Generate plausible feed notifications around a reference date
pub fn generate_notification_data(count: usize, today: NaiveDate) -> Vec<Notification> {
    let mut rng = rand::thread_rng();

    let mut notifications = Vec::with_capacity(count);
    for i in 0..count {
        let severity = match rng.gen_range(0..100) {
            0..=59 => Severity::Info,
            60..=89 => Severity::Warning,
            _ => Severity::Critical,
        };

        let (title, body) = match severity {
            Severity::Info => ("Report ready", "The monthly report has been generated."),
            Severity::Warning => ("Warranty expiring", "A warranty expires within 30 days."),
            Severity::Critical => ("Invoice overdue", "An invoice is past its due date."),
        };

        notifications.push(Notification {
            id: format!("NTF-{:04}", i + 1),
            title: title.to_string(),
            body: body.to_string(),
            severity,
            created_at: today - Days::new(rng.gen_range(0..30u64)),
            read: rng.gen_bool(0.4),
        });
    }

    notifications
}
