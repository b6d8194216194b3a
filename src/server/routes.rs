//! Axum route handlers for the HTTP API.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::models::{ErrorResponse, HealthResponse, TranslateRequest, TranslateResponse};
use super::state::AppState;
use crate::error::BoliError;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// `GET /health` — always healthy, independent of dictionary or network state.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// `POST /translate` — translate one sentence.
///
/// # Errors
///
/// - 400 Bad Request: missing body, empty fields, unsupported language codes
/// - 500 Internal Server Error: anything unexpected
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let span = info_span!("translate", request_id = %Uuid::new_v4());
    handle_translate(&state, payload).instrument(span).await
}

async fn handle_translate(
    state: &AppState,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected request body: {}", e);
        bad_request("No JSON data provided".to_string())
    })?;

    let text = request.text.trim();
    let source_lang = request.source_lang.trim().to_lowercase();
    let target_lang = request.target_lang.trim().to_lowercase();
    info!("Translation request: {} from {} to {}", text, source_lang, target_lang);

    let translation = state
        .translator
        .translate_codes(text, &source_lang, &target_lang)
        .await
        .map_err(into_api_error)?;

    info!("Translation successful: {}", translation);
    Ok(Json(TranslateResponse {
        translation,
        source_lang,
        target_lang,
    }))
}

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn into_api_error(err: BoliError) -> ApiError {
    if err.is_invalid_input() {
        warn!("Validation error: {}", err);
        bad_request(err.to_string())
    } else {
        error!("Unexpected error: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("An error occurred: {}", err),
            }),
        )
    }
}
