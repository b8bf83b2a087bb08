//! Invoice roll-ups for the billing view
//!
//! Totals invoices by effective status, shapes the status breakdown the
//! pie chart consumes, and extracts the paid-revenue trend.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use trend_analytics::utils::percentage_of;
use trend_analytics::{CategoryBreakdown, TrendPoint};

use crate::{Invoice, InvoiceStatus};

/// Count and amount of invoices sharing one effective status
#[derive(Debug, Clone, PartialEq)]
pub struct StatusTotal {
    /// The status bucket
    pub status: InvoiceStatus,
    /// Number of invoices in the bucket
    pub count: usize,
    /// Summed amount of the bucket
    pub amount: f64,
}

/// Per-status totals for a set of invoices
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary {
    /// One bucket per status, in lifecycle order
    pub totals: Vec<StatusTotal>,
    /// Number of invoices summarized
    pub total_count: usize,
    /// Summed amount across all invoices
    pub total_amount: f64,
    /// Summed amount still awaiting payment (sent or overdue)
    pub outstanding_amount: f64,
}

impl InvoiceSummary {
    /// Summarize invoices relative to a reference date
    ///
    /// Buckets are keyed on the effective status, so a sent invoice past
    /// its due date counts as overdue here even if the upstream record
    /// still says sent.
    pub fn compute(invoices: &[Invoice], today: NaiveDate) -> Self {
        let mut totals: Vec<StatusTotal> = InvoiceStatus::ALL
            .iter()
            .map(|&status| StatusTotal {
                status,
                count: 0,
                amount: 0.0,
            })
            .collect();

        let mut total_amount = 0.0;
        let mut outstanding_amount = 0.0;

        for invoice in invoices {
            let status = invoice.effective_status(today);
            if let Some(bucket) = totals.iter_mut().find(|t| t.status == status) {
                bucket.count += 1;
                bucket.amount += invoice.amount;
            }

            total_amount += invoice.amount;
            if matches!(status, InvoiceStatus::Sent | InvoiceStatus::Overdue) {
                outstanding_amount += invoice.amount;
            }
        }

        InvoiceSummary {
            totals,
            total_count: invoices.len(),
            total_amount,
            outstanding_amount,
        }
    }

    /// Shape the totals into the category breakdown the pie chart takes
    ///
    /// Percentages are each status's share of the total amount, rounded
    /// to one decimal; a zero total yields all-zero percentages.
    pub fn status_breakdown(&self) -> Vec<CategoryBreakdown> {
        self.totals
            .iter()
            .map(|bucket| {
                CategoryBreakdown::new(
                    bucket.status.to_string(),
                    bucket.amount,
                    percentage_of(bucket.amount, self.total_amount),
                )
            })
            .collect()
    }

    /// Count of invoices in one status bucket
    pub fn count_of(&self, status: InvoiceStatus) -> usize {
        self.totals
            .iter()
            .find(|t| t.status == status)
            .map_or(0, |t| t.count)
    }
}

impl fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice Summary")?;
        writeln!(f, "  Total:       {} invoices", self.total_count)?;
        for bucket in &self.totals {
            writeln!(
                f,
                "  {:<12} {} invoices, {:.2}",
                format!("{}:", bucket.status),
                bucket.count,
                bucket.amount
            )?;
        }
        write!(f, "  Outstanding: {:.2}", self.outstanding_amount)
    }
}

/// Invoices effectively overdue as of `today`, in input order
pub fn overdue<'a>(invoices: &'a [Invoice], today: NaiveDate) -> Vec<&'a Invoice> {
    invoices
        .iter()
        .filter(|invoice| invoice.is_overdue(today))
        .collect()
}

/// Paid revenue summed per issue date, in chronological order
pub fn revenue_trend(invoices: &[Invoice]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for invoice in invoices {
        if invoice.status == InvoiceStatus::Paid {
            *by_date.entry(invoice.issued_on).or_insert(0.0) += invoice.amount;
        }
    }

    by_date
        .into_iter()
        .map(|(date, value)| TrendPoint::new(date, value))
        .collect()
}
