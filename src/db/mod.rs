//! Persistence Gateway for saved summaries.

mod repository;
mod rest;
mod schema;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewSummaryRecord, RecordId, SummaryRecord};

pub use repository::SqliteStore;
pub use rest::RestStore;

/// A store of saved summaries. Every call is a live round trip; nothing is
/// cached on this side.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Insert a new record. Always creates a new row, even for a payload
    /// identical to one already stored.
    async fn save(&self, record: NewSummaryRecord) -> Result<RecordId>;

    /// Delete by id. Deleting an id that does not exist succeeds.
    async fn delete(&self, id: &RecordId) -> Result<()>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<SummaryRecord>>;
}
