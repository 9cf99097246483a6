use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Profit of one rate link whose tutor and parent rates both still exist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitEntry {
    pub link_id: String,
    pub tutor_rate_id: String,
    pub tutor_rate_name: String,
    pub parent_rate_id: String,
    pub parent_rate_name: String,
    pub tutor_amount: Decimal,
    pub parent_amount: Decimal,
    /// Negative when the tutor is paid more than the parent is billed
    pub profit: Decimal,
    /// Unrounded; zero when the parent amount is zero
    pub margin_percent: Decimal,
    /// Margin rounded to one decimal place
    pub margin_display: String,
}

impl ProfitEntry {
    pub fn is_loss(&self) -> bool {
        self.profit < Decimal::ZERO
    }
}

/// Aggregate over every surviving link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    pub count: usize,
    pub avg_tutor_rate: Decimal,
    pub avg_parent_rate: Decimal,
    pub avg_profit: Decimal,
    pub avg_margin_percent: Decimal,
    pub avg_margin_display: String,
}

impl ProfitSummary {
    pub fn empty() -> Self {
        Self {
            count: 0,
            avg_tutor_rate: Decimal::ZERO,
            avg_parent_rate: Decimal::ZERO,
            avg_profit: Decimal::ZERO,
            avg_margin_percent: Decimal::ZERO,
            avg_margin_display: money::format_percent(Decimal::ZERO),
        }
    }
}

/// Profit table plus summary, recomputed on every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitReport {
    pub entries: Vec<ProfitEntry>,
    pub summary: ProfitSummary,
    pub generated_at: DateTime<Utc>,
}

impl ProfitReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
