use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tokio_rusqlite::Connection;

use crate::error::Result;
use crate::models::{NewSummaryRecord, RecordId, SummaryRecord};

use super::schema::SCHEMA;
use super::SummaryStore;

/// Local SQLite store, used when no managed store is configured.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub async fn new(db_path: &str) -> Result<Self> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path).await?;
        Self::init(conn).await
    }

    pub async fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().await?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self> {
        conn.call(|conn| {
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl SummaryStore for SqliteStore {
    async fn save(&self, record: NewSummaryRecord) -> Result<RecordId> {
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO summaries (url, summary, translation, language) VALUES (?1, ?2, ?3, ?4)",
                    params![record.url, record.summary, record.translation, record.language],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;
        Ok(RecordId::new(id.to_string()))
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        // Row ids are integers here; anything else cannot match a row.
        let Ok(row_id) = id.as_str().parse::<i64>() else {
            tracing::debug!("Delete of non-numeric id {} matched nothing", id);
            return Ok(());
        };

        let removed = self
            .conn
            .call(move |conn| {
                let n = conn.execute("DELETE FROM summaries WHERE id = ?1", params![row_id])?;
                Ok(n)
            })
            .await?;

        if removed == 0 {
            tracing::debug!("Delete of id {} matched nothing", row_id);
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SummaryRecord>> {
        let records = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, url, summary, translation, language, created_at FROM summaries ORDER BY created_at DESC, id DESC",
                )?;
                let records = stmt
                    .query_map([], record_from_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(records)
            })
            .await?;
        Ok(records)
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Plain SQLite datetime('now') format
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    None
}

fn record_from_row(row: &Row) -> rusqlite::Result<SummaryRecord> {
    let id: i64 = row.get(0)?;
    let raw_created: Option<String> = row.get(5).ok();
    let created_at = match raw_created.as_deref().and_then(parse_datetime) {
        Some(dt) => dt,
        None => {
            tracing::warn!(
                "Summary {} has unreadable created_at {:?}, using current time",
                id,
                raw_created
            );
            Utc::now()
        }
    };
    Ok(SummaryRecord {
        id: RecordId::new(id.to_string()),
        url: row.get(1)?,
        summary: row.get(2)?,
        translation: row.get(3)?,
        language: row.get(4)?,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn record(url: &str) -> NewSummaryRecord {
        NewSummaryRecord {
            url: url.to_string(),
            summary: "A short summary.".to_string(),
            translation: "ایک مختصر خلاصہ".to_string(),
            language: "Urdu".to_string(),
        }
    }

    #[tokio::test]
    async fn same_payload_saved_twice_gets_two_ids() {
        let store = SqliteStore::in_memory().await.unwrap();

        let first = store.save(record("https://example.com/a")).await.unwrap();
        let second = store.save(record("https://example.com/a")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_only_that_record() {
        let store = SqliteStore::in_memory().await.unwrap();
        let keep = store.save(record("https://example.com/keep")).await.unwrap();
        let gone = store.save(record("https://example.com/gone")).await.unwrap();

        assert_ok!(store.delete(&gone).await);

        let remaining = store.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep);
        assert_eq!(remaining[0].url, "https://example.com/keep");
        assert_eq!(remaining[0].translation, "ایک مختصر خلاصہ");
    }

    #[tokio::test]
    async fn deleting_unknown_ids_succeeds() {
        let store = SqliteStore::in_memory().await.unwrap();
        assert_ok!(store.delete(&RecordId::new("999")).await);
        assert_ok!(store.delete(&RecordId::new("not-a-row")).await);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.save(record("https://example.com/1")).await.unwrap();
        store.save(record("https://example.com/2")).await.unwrap();

        let urls: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["https://example.com/2", "https://example.com/1"]);
    }

    #[tokio::test]
    async fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("summaries.db");
        let path = path.to_str().unwrap();

        let id = {
            let store = SqliteStore::new(path).await.unwrap();
            store.save(record("https://example.com/kept")).await.unwrap()
        };

        let store = SqliteStore::new(path).await.unwrap();
        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
    }

    #[tokio::test]
    async fn unreadable_timestamp_still_lists_the_record() {
        let store = SqliteStore::in_memory().await.unwrap();
        let id = store.save(record("https://example.com/odd")).await.unwrap();
        store
            .conn
            .call(|conn| {
                conn.execute("UPDATE summaries SET created_at = 'yesterday'", [])?;
                Ok(())
            })
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].url, "https://example.com/odd");
    }

    #[test]
    fn parses_both_timestamp_formats() {
        assert!(parse_datetime("2025-03-01T10:00:00.123Z").is_some());
        assert!(parse_datetime("2025-03-01 10:00:00").is_some());
        assert!(parse_datetime("yesterday").is_none());
    }
}
