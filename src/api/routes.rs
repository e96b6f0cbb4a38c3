use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::render::STYLESHEET_PATH;

use super::handlers;
use super::AppState;

/// Creates the router serving the page and its form actions
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Page
        .route("/", get(handlers::index))
        .route(STYLESHEET_PATH, get(handlers::stylesheet))
        // Form actions
        .route("/recommend", post(handlers::recommend))
        .route("/filters", post(handlers::filters))
        .route("/theme", post(handlers::toggle_theme))
        .route("/toasts/:id/dismiss", post(handlers::dismiss_toast))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
