// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    go_back, go_home, health_check, index, list_pages_api, page_api, refresh, show_page,
    update_filters,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is applied by the response builders, so there is no
// CompressionLayer here.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(index))
        .route("/pages/:slug", get(show_page))
        .route("/back", get(go_back))
        .route("/home", get(go_home))
        .route("/filters", post(update_filters))
        .route("/refresh", post(refresh))
        .route("/api/pages", get(list_pages_api))
        .route("/api/pages/:slug", get(page_api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
