//! HTTP handlers

pub mod error;
pub mod feedback;
pub mod health;
pub mod speech;
pub mod summaries;
pub mod summarize;

pub use error::ApiError;
pub use feedback::send_feedback;
pub use health::health_routes;
pub use speech::speech;
pub use summaries::{delete_summary, list_summaries, save_summary};
pub use summarize::summarize;
