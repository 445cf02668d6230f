use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::AppState;

pub mod health;
pub mod tasks;

/// Plain text greeting, kept for quick reachability checks.
async fn root() -> &'static str {
    "hello"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .merge(tasks::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
