use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state. Mounted under `/api` by the server.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/whois", post(handlers::lookup_whois))
        .route("/whois/{host}/record", get(handlers::get_whois_record))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}

/// Browser lookup form, served at the site root.
pub fn create_index_routes() -> Router {
    Router::new().route("/", get(handlers::index_page))
}
