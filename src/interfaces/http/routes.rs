//! HTTP Routes
//!
//! Axum router configuration for the prediction service.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::application::inference_handler::InferenceHandler;

/// Application state shared across handlers
pub struct AppState {
    pub handler: InferenceHandler,
    pub strict_http_status: bool,
}

impl AppState {
    pub fn new(handler: InferenceHandler, strict_http_status: bool) -> Self {
        Self {
            handler,
            strict_http_status,
        }
    }
}

/// Create the main application router
///
/// # Routes
/// - `GET /` - Landing page with an applicant form
/// - `GET /health` - Liveness and loaded model info
/// - `POST /predict` - Score one applicant (JSON or form body)
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
