// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    health_check, index, layout, payload_scatter, success_pie,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(health_check))
        .route("/api/layout", get(layout))
        .route("/api/charts/success-pie", get(success_pie))
        .route("/api/charts/payload-scatter", get(payload_scatter))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
