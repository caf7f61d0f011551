mod price_point;
mod horizon;
mod summary;
mod dashboard;

pub use price_point::{PricePoint, PriceTable};
pub use horizon::{Horizon, HorizonOption};
pub use summary::SummaryResult;
pub use dashboard::{DashboardView, Metric, Series, SeriesPoint};
