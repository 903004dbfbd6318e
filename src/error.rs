use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Async database error: {0}")]
    AsyncDatabase(#[from] tokio_rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("No readable content at {0}")]
    EmptyContent(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Email provider error: {0}")]
    Mail(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
