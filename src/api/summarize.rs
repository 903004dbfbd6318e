use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use super::ApiError;
use crate::models::{SummaryRequest, SummaryResult};
use crate::AppState;

/// POST /api/summarize
///
/// Runs the full pipeline for `{url, language}`. Every pipeline failure is
/// reported as the same generic error; the cause is only logged.
pub async fn summarize(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummaryResult>, ApiError> {
    let request: SummaryRequest = serde_json::from_slice(&body).unwrap_or_default();
    let language = request
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(state.default_language.as_str());

    match state.pipeline.summarize_blog(&request.url, language).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_input_error() => Err(ApiError::validation(e.to_string())),
        Err(e) => Err(ApiError::upstream(e.to_string())),
    }
}
