use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use super::routes::AppState;
use crate::application::raw_input::RawInput;
use crate::domain::errors::PredictionError;

const LANDING_PAGE: &str = include_str!("../../../static/form.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub version: String,
    pub features: usize,
}

pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let classifier = state.handler.classifier();
    Json(HealthResponse {
        status: "ok".to_string(),
        model: classifier.name().to_string(),
        version: classifier.version().to_string(),
        features: classifier.feature_names().len(),
    })
}

/// `POST /predict`. Always answers with JSON; failures never escape as a
/// bare 500 from the framework.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let outcome = parse_body(&headers, &body).and_then(|raw| state.handler.handle(raw));

    match outcome {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            warn!(kind = e.kind(), "Prediction rejected: {}", e);
            let status = if state.strict_http_status {
                status_for(&e)
            } else {
                StatusCode::OK
            };
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}

fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<RawInput, PredictionError> {
    if is_form(headers) {
        Ok(RawInput::from_form_slice(body))
    } else {
        RawInput::from_json_slice(body)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|media_type| {
            media_type
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

/// Status used when strict mode is on.
pub fn status_for(error: &PredictionError) -> StatusCode {
    match error {
        PredictionError::InvalidInput { .. }
        | PredictionError::MissingFeature { .. }
        | PredictionError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
        PredictionError::InferenceFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_form_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_form(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        assert!(is_form(&headers));

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/X-WWW-Form-Urlencoded"),
        );
        assert!(is_form(&headers));

        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_form(&headers));
    }

    #[test]
    fn test_strict_status_mapping() {
        assert_eq!(
            status_for(&PredictionError::not_a_number("Amount")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&PredictionError::InferenceFailure {
                reason: "boom".to_string()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
