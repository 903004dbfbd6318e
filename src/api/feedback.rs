use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::ApiError;
use crate::models::FeedbackMessage;
use crate::AppState;

const SEND_FAILED: &str = "Failed to send email";

/// POST /api/sendFeedback
///
/// Input is not validated here; the form checks it before submitting.
/// Anything odd is logged and delivery is still attempted.
pub async fn send_feedback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let feedback: FeedbackMessage = serde_json::from_slice(&body).map_err(|e| {
        error!("Unreadable feedback body: {}", e);
        ApiError::upstream(SEND_FAILED)
    })?;

    if !feedback.has_valid_email() {
        warn!(email = %feedback.email, "Feedback with malformed email");
    }
    if !feedback.has_message() {
        warn!("Feedback with empty message");
    }

    let Some(notifier) = state.notifier.as_ref() else {
        error!("Email sending failed: no email provider configured");
        return Err(ApiError::upstream(SEND_FAILED));
    };

    notifier.send_feedback(&feedback).await.map_err(|e| {
        error!("Email sending failed: {}", e);
        ApiError::upstream(SEND_FAILED)
    })?;

    Ok(Json(json!({ "success": true })))
}
