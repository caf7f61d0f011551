use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{DashboardView, Horizon, HorizonOption, SummaryResult};
use crate::services::{dashboard_service, range_summarizer};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/horizons", get(get_horizons))
        .route("/summary", get(get_summary))
        .route("/dashboard", get(get_dashboard))
}

#[derive(Debug, Deserialize)]
struct HorizonQuery {
    horizon: Option<String>,
}

impl HorizonQuery {
    fn resolve(&self) -> Result<Horizon, AppError> {
        match self.horizon.as_deref() {
            Some(raw) => raw.parse::<Horizon>().map_err(AppError::from),
            None => Ok(Horizon::default()),
        }
    }
}

async fn get_horizons() -> Json<Vec<HorizonOption>> {
    info!("GET /api/horizons - Listing horizon options");
    Json(dashboard_service::horizon_options())
}

async fn get_summary(
    Query(params): Query<HorizonQuery>,
    State(state): State<AppState>,
) -> Result<Json<SummaryResult>, AppError> {
    let horizon = params.resolve()?;
    info!("GET /api/summary - Summarizing {}", horizon);

    let summary = range_summarizer::summarize(&state.table, horizon).map_err(|e| {
        warn!("Cannot summarize {}: {}", horizon, e);
        e
    })?;
    Ok(Json(summary))
}

async fn get_dashboard(
    Query(params): Query<HorizonQuery>,
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let horizon = params.resolve()?;
    info!("GET /api/dashboard - Building dashboard for {}", horizon);

    let summary = range_summarizer::summarize(&state.table, horizon).map_err(|e| {
        warn!("Cannot build dashboard for {}: {}", horizon, e);
        e
    })?;
    Ok(Json(dashboard_service::build_view(&state.config, &summary)))
}
