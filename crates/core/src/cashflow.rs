//! Cash flow summary records.

use cashflow_shared::types::Cents;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inflows and outflows over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    /// First day of the range.
    pub start_date: NaiveDate,
    /// Last day of the range.
    pub end_date: NaiveDate,
    /// Total inflows.
    #[serde(default)]
    pub total_inflow_cents: Cents,
    /// Total outflows.
    #[serde(default)]
    pub total_outflow_cents: Cents,
    /// Inflows minus outflows.
    #[serde(default)]
    pub net_cents: Cents,
    /// Per-period buckets, in backend order.
    #[serde(default)]
    pub periods: Vec<CashFlowPeriod>,
}

/// One bucket (e.g. a day) of a cash flow summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPeriod {
    /// First day of the bucket.
    pub period_start: NaiveDate,
    /// Last day of the bucket.
    pub period_end: NaiveDate,
    /// Inflows in the bucket.
    #[serde(default)]
    pub inflow_cents: Cents,
    /// Outflows in the bucket.
    #[serde(default)]
    pub outflow_cents: Cents,
    /// Inflows minus outflows.
    #[serde(default)]
    pub net_cents: Cents,
    /// Number of payments in the bucket.
    #[serde(default)]
    pub transaction_count: u32,
}

impl CashFlowSummary {
    /// True when more money came in than went out.
    #[must_use]
    pub fn is_net_positive(&self) -> bool {
        self.net_cents >= 0
    }

    /// Returns the first `limit` periods.
    #[must_use]
    pub fn leading_periods(&self, limit: usize) -> &[CashFlowPeriod] {
        &self.periods[..self.periods.len().min(limit)]
    }

    /// Total number of payments across all periods.
    #[must_use]
    pub fn transaction_count(&self) -> u64 {
        self.periods
            .iter()
            .map(|p| u64::from(p.transaction_count))
            .sum()
    }
}
