use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::ApiError;
use crate::error::AppError;
use crate::models::{NewSummaryRecord, RecordId, SummaryRecord};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub message: &'static str,
    pub id: RecordId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

/// POST /api/saveBlog
pub async fn save_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SavedResponse>, ApiError> {
    let record: NewSummaryRecord = serde_json::from_slice(&body).map_err(|e| {
        error!("Unreadable save body: {}", e);
        ApiError::upstream("Failed to save summary")
    })?;

    let id = state.store.save(record).await.map_err(|e| {
        error!("Summary save failed: {}", e);
        ApiError::upstream("Failed to save summary")
    })?;

    info!(id = %id, "Summary saved");
    Ok(Json(SavedResponse {
        message: "Saved successfully",
        id,
    }))
}

/// DELETE /api/deleteBlog
pub async fn delete_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DeletedResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let id = payload
        .get("id")
        .and_then(RecordId::from_json)
        .ok_or_else(|| ApiError::validation("Missing ID"))?;

    state.store.delete(&id).await.map_err(|e| {
        error!(id = %id, "Summary delete failed: {}", e);
        match e {
            AppError::Storage(message) => ApiError::upstream(message),
            _ => ApiError::upstream("Failed to delete summary"),
        }
    })?;

    info!(id = %id, "Summary deleted");
    Ok(Json(DeletedResponse {
        message: "Deleted successfully",
    }))
}

/// GET /api/summaries
pub async fn list_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SummaryRecord>>, ApiError> {
    let records = state.store.list().await.map_err(|e| {
        error!("Summary list failed: {}", e);
        ApiError::upstream("Failed to load summaries")
    })?;
    Ok(Json(records))
}
