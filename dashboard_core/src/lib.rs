//! # Dashboard Core
//!
//! `dashboard_core` is the data layer behind a warranty and billing
//! dashboard. It owns the REST-shaped domain records, the per-view
//! summaries computed from them, and the fetch-state store that holds
//! loaded collections between refreshes. All chart math is delegated to
//! the `trend_analytics` crate.
//!
//! ## Record Categories
//!
//! - **Warranties**: purchase and expiry dates with claim counts, rolled
//!   up by derived status (active, expiring soon, expired)
//! - **Invoices**: amounts and lifecycle status, rolled up into totals,
//!   category breakdowns and a revenue trend
//! - **Notifications**: severity-tagged feed items with read tracking
//!
//! ## Usage Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use dashboard_core::utils::generate_warranty_data;
//! use dashboard_core::warranty::WarrantySummary;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let records = generate_warranty_data(50, today);
//!
//! let summary = WarrantySummary::compute(&records, today);
//! println!("{}", summary);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Per-view summary modules
pub mod invoices;
pub mod notifications;
pub mod warranty;
// Fetch-state store for loaded collections
pub mod store;
// Sample data generators
pub mod utils;

pub use invoices::{InvoiceSummary, StatusTotal};
pub use notifications::NotificationFeed;
pub use store::{CollectionStore, FetchState};
pub use warranty::WarrantySummary;

/// Days before expiry at which a warranty counts as expiring soon
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Errors that can occur in dashboard data operations
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::ParseError(err.to_string())
    }
}

/// Trait for records addressable by a stable string id
///
/// The collection store keys its replace and remove operations on this.
pub trait Record {
    /// Stable identifier of the record
    fn id(&self) -> &str;
}

/// Derived lifecycle status of a warranty relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarrantyStatus {
    /// More than [`EXPIRING_SOON_DAYS`] days of coverage left
    Active,
    /// Expiring within [`EXPIRING_SOON_DAYS`] days
    ExpiringSoon,
    /// Expiry date has passed
    Expired,
}

impl fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarrantyStatus::Active => "active",
            WarrantyStatus::ExpiringSoon => "expiring soon",
            WarrantyStatus::Expired => "expired",
        };
        write!(f, "{}", name)
    }
}

/// A product warranty as served by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyRecord {
    /// Stable identifier
    pub id: String,
    /// Product name
    pub product: String,
    /// Date the product was purchased
    pub purchase_date: NaiveDate,
    /// Date coverage ends
    pub expiry_date: NaiveDate,
    /// Number of claims filed against this warranty
    pub claim_count: u32,
}

impl WarrantyRecord {
    /// Create a warranty record, validating the coverage interval
    pub fn new(
        id: impl Into<String>,
        product: impl Into<String>,
        purchase_date: NaiveDate,
        expiry_date: NaiveDate,
        claim_count: u32,
    ) -> Result<Self, DashboardError> {
        if expiry_date < purchase_date {
            return Err(DashboardError::InvalidRecord(format!(
                "Expiry date {} is before purchase date {}",
                expiry_date, purchase_date
            )));
        }

        Ok(WarrantyRecord {
            id: id.into(),
            product: product.into(),
            purchase_date,
            expiry_date,
            claim_count,
        })
    }

    /// Lifecycle status of this warranty as of `today`
    pub fn status_on(&self, today: NaiveDate) -> WarrantyStatus {
        if self.expiry_date < today {
            return WarrantyStatus::Expired;
        }

        let days_left = self.expiry_date.signed_duration_since(today).num_days();
        if days_left <= EXPIRING_SOON_DAYS {
            WarrantyStatus::ExpiringSoon
        } else {
            WarrantyStatus::Active
        }
    }
}

impl Record for WarrantyRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Not yet sent to the customer
    Draft,
    /// Sent and awaiting payment
    Sent,
    /// Payment received
    Paid,
    /// Past its due date without payment
    Overdue,
}

impl InvoiceStatus {
    /// All statuses in lifecycle order
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    /// Lowercase name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, DashboardError> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            _ => Err(DashboardError::ParseError(format!(
                "Unknown invoice status: {}",
                s
            ))),
        }
    }
}

/// An invoice as served by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Stable identifier
    pub id: String,
    /// Customer the invoice was issued to
    pub customer: String,
    /// Invoiced amount
    pub amount: f64,
    /// Status as recorded upstream
    pub status: InvoiceStatus,
    /// Date the invoice was issued
    pub issued_on: NaiveDate,
    /// Date payment is due
    pub due_on: NaiveDate,
}

impl Invoice {
    /// Create an invoice, validating the amount and date interval
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        amount: f64,
        status: InvoiceStatus,
        issued_on: NaiveDate,
        due_on: NaiveDate,
    ) -> Result<Self, DashboardError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DashboardError::InvalidRecord(format!(
                "Invoice amount must be a non-negative number, got {}",
                amount
            )));
        }
        if due_on < issued_on {
            return Err(DashboardError::InvalidRecord(format!(
                "Due date {} is before issue date {}",
                due_on, issued_on
            )));
        }

        Ok(Invoice {
            id: id.into(),
            customer: customer.into(),
            amount,
            status,
            issued_on,
            due_on,
        })
    }

    /// Status of this invoice as of `today`
    ///
    /// Paid and draft invoices keep their recorded status; an unpaid sent
    /// invoice past its due date is reported as overdue even when the
    /// upstream record has not caught up yet.
    pub fn effective_status(&self, today: NaiveDate) -> InvoiceStatus {
        match self.status {
            InvoiceStatus::Paid | InvoiceStatus::Draft => self.status,
            InvoiceStatus::Sent | InvoiceStatus::Overdue => {
                if self.due_on < today {
                    InvoiceStatus::Overdue
                } else {
                    self.status
                }
            }
        }
    }

    /// Whether this invoice is effectively overdue as of `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == InvoiceStatus::Overdue
    }
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational
    Info,
    /// Needs attention soon
    Warning,
    /// Needs attention now
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Severity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, DashboardError> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(DashboardError::ParseError(format!(
                "Unknown severity: {}",
                s
            ))),
        }
    }
}

/// A feed notification as served by the REST layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Stable identifier
    pub id: String,
    /// Short headline
    pub title: String,
    /// Longer message body
    pub body: String,
    /// How urgent the notification is
    pub severity: Severity,
    /// Date the notification was created
    pub created_at: NaiveDate,
    /// Whether the user has read it
    pub read: bool,
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Parse a JSON array of records, as returned by the REST layer
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>, DashboardError> {
    Ok(serde_json::from_str(json)?)
}

/// Version of the dashboard_core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
