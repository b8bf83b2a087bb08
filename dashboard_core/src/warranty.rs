//! Warranty roll-ups for the dashboard overview
//!
//! Aggregates a set of warranty records into the status counts shown on
//! the metric cards and the monthly claim trend behind the overview chart.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use trend_analytics::TrendPoint;

use crate::{WarrantyRecord, WarrantyStatus};

/// Status counts and claim totals for a set of warranties
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WarrantySummary {
    /// Number of records summarized
    pub total: usize,
    /// Warranties with more than a month of coverage left
    pub active: usize,
    /// Warranties expiring within the warning window
    pub expiring_soon: usize,
    /// Warranties past their expiry date
    pub expired: usize,
    /// Claims filed across all records
    pub total_claims: u64,
}

impl WarrantySummary {
    /// Summarize warranty records relative to a reference date
    ///
    /// Every record lands in exactly one status bucket, so the three
    /// counts always sum to `total`.
    pub fn compute(records: &[WarrantyRecord], today: NaiveDate) -> Self {
        let mut summary = WarrantySummary {
            total: records.len(),
            ..Default::default()
        };

        for record in records {
            match record.status_on(today) {
                WarrantyStatus::Active => summary.active += 1,
                WarrantyStatus::ExpiringSoon => summary.expiring_soon += 1,
                WarrantyStatus::Expired => summary.expired += 1,
            }
            summary.total_claims += u64::from(record.claim_count);
        }

        summary
    }
}

impl fmt::Display for WarrantySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Warranty Summary")?;
        writeln!(f, "  Total:         {}", self.total)?;
        writeln!(f, "  Active:        {}", self.active)?;
        writeln!(f, "  Expiring soon: {}", self.expiring_soon)?;
        writeln!(f, "  Expired:       {}", self.expired)?;
        write!(f, "  Claims filed:  {}", self.total_claims)
    }
}

/// Claims filed per purchase month, in chronological order
///
/// Each point is dated on the first of its month and carries the claim
/// count for warranties purchased that month. The result feeds the
/// overview chart and the anomaly panel, so unlike the raw bucketing
/// helpers it is always sorted.
pub fn claim_trend(records: &[WarrantyRecord]) -> Vec<TrendPoint> {
    let mut by_month: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for record in records {
        if let Some(month) = record.purchase_date.with_day(1) {
            *by_month.entry(month).or_insert(0.0) += f64::from(record.claim_count);
        }
    }

    by_month
        .into_iter()
        .map(|(date, value)| TrendPoint::new(date, value))
        .collect()
}

/// Warranties whose coverage ends within `days` of `today`
///
/// Already-expired records are excluded; the expiry day itself counts.
pub fn expiring_within(
    records: &[WarrantyRecord],
    today: NaiveDate,
    days: i64,
) -> Vec<&WarrantyRecord> {
    records
        .iter()
        .filter(|record| {
            let days_left = record.expiry_date.signed_duration_since(today).num_days();
            (0..=days).contains(&days_left)
        })
        .collect()
}
