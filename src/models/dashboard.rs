use chrono::NaiveDate;
use serde::Serialize;

use super::{Horizon, HorizonOption};

// One scalar card in the summary column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<T> {
    pub date: NaiveDate,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<T> {
    pub name: String,
    pub points: Vec<SeriesPoint<T>>,
}

// Everything the rendering client needs for one horizon selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub horizon: Horizon,
    pub horizons: Vec<HorizonOption>,
    pub metrics: Vec<Metric>,
    pub price_series: Series<f64>,
    pub volume_series: Series<u64>,
}
