use axum::body::Bytes;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::services::speech::{compose_utterance, SpeechKind, Utterance};

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub kind: SpeechKind,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub translated: String,
    #[serde(default)]
    pub language: String,
}

/// POST /api/speech
pub async fn speech(body: Bytes) -> Result<Json<Utterance>, ApiError> {
    let request: SpeechRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::validation("Invalid speech request"))?;

    compose_utterance(
        request.kind,
        &request.summary,
        &request.translated,
        &request.language,
    )
    .map(Json)
    .ok_or_else(|| ApiError::validation("Nothing to read"))
}
