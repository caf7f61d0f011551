use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One trading day of the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Daily prices ordered by ascending date.
///
/// The only way to build one is [`PriceTable::from_points`], which sorts,
/// so every `PriceTable` in the process is chronologically ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceTable {
    points: Vec<PricePoint>,
}

impl PriceTable {
    /// Stable sort: rows sharing a date keep their source order.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Rows dated on or after `cutoff`, in table order.
    pub fn since(&self, cutoff: NaiveDate) -> PriceTable {
        let start = self.points.partition_point(|p| p.date < cutoff);
        PriceTable {
            points: self.points[start..].to_vec(),
        }
    }

    pub fn has_duplicate_dates(&self) -> bool {
        self.points.windows(2).any(|w| w[0].date == w[1].date)
    }
}
