use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{dashboard, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The rendering client may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api", dashboard::router())
        .layer(cors)
        .with_state(state)
}
