//! HTTP Server Layer
//!
//! Axum-based HTTP surface for the prediction pipeline.
//!
//! ```text
//! Client ──POST /predict──> RawInput ──> InferenceHandler ──> Classifier
//!    ▲                                          │
//!    └──────── {"prediction", "success_probability"} | {"error"} ◄┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ErrorResponse, HealthResponse};
pub use routes::{AppState, create_router};
