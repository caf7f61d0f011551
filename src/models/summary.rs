use chrono::NaiveDate;
use serde::Serialize;

use super::{Horizon, PriceTable};

/// Statistics for one horizon selection. Rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub horizon: Horizon,
    pub cutoff: Option<NaiveDate>,
    pub filtered_table: PriceTable,
    pub latest_close: f64,
    pub previous_close: f64,
    pub absolute_change: f64,
    pub percent_change: f64,
    pub period_high: f64,
    pub period_low: f64,
}
