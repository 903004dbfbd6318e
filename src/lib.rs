//! blog-digest: paste a blog URL, get an AI summary and a translation of it.
//!
//! The summarize route runs fetch → extract → summarize → translate in
//! sequence. Saving, deleting and listing summaries and sending feedback are
//! separate, user-triggered calls to the persistence and email gateways.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod ai;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;

#[cfg(test)]
mod test_support;

use db::SummaryStore;
use pipeline::SummaryPipeline;
use services::Notifier;

/// Services shared by all handlers. Built once at startup and injected.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
    pub store: Arc<dyn SummaryStore>,
    /// `None` when no email provider is configured.
    pub notifier: Option<Arc<dyn Notifier>>,
    pub default_language: String,
}

impl AppState {
    pub fn new(
        pipeline: Arc<SummaryPipeline>,
        store: Arc<dyn SummaryStore>,
        notifier: Option<Arc<dyn Notifier>>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            pipeline,
            store,
            notifier,
            default_language: default_language.into(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get, post};

    Router::new()
        .route("/api/summarize", post(api::summarize))
        .route("/api/saveBlog", post(api::save_summary))
        .route("/api/deleteBlog", delete(api::delete_summary))
        .route("/api/summaries", get(api::list_summaries))
        .route("/api/sendFeedback", post(api::send_feedback))
        .route("/api/speech", post(api::speech))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
