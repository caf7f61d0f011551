use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::models::PriceTable;

// Loaded once in main; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<PriceTable>,
    pub config: Arc<DashboardConfig>,
}

impl AppState {
    pub fn new(table: PriceTable, config: DashboardConfig) -> Self {
        Self {
            table: Arc::new(table),
            config: Arc::new(config),
        }
    }
}
