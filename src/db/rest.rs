use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::SupabaseCredentials;
use crate::error::{AppError, Result};
use crate::models::{NewSummaryRecord, RecordId, SummaryRecord};

use super::SummaryStore;

const TABLE: &str = "summaries";

#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: RecordId,
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: Option<String>,
}

/// Managed store exposing the `summaries` table over a PostgREST endpoint.
pub struct RestStore {
    client: Client,
    table_url: String,
    service_key: String,
}

impl RestStore {
    pub fn new(credentials: &SupabaseCredentials, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            table_url: format!(
                "{}/rest/v1/{}",
                credentials.url.trim_end_matches('/'),
                TABLE
            ),
            service_key: credentials.service_role_key.clone(),
        })
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

/// Turn a non-2xx store reply into a storage error carrying the store's own
/// message when it sent one.
async fn check(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await?;
    let message = serde_json::from_str::<StoreErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("store returned {}", status));
    Err(AppError::Storage(message))
}

fn id_filter(id: &RecordId) -> String {
    format!("eq.{}", urlencoding::encode(id.as_str()))
}

#[async_trait]
impl SummaryStore for RestStore {
    async fn save(&self, record: NewSummaryRecord) -> Result<RecordId> {
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await?;

        let rows: Vec<InsertedRow> = check(response).await?.json().await?;

        rows.into_iter()
            .next()
            .map(|row| row.id)
            .ok_or_else(|| AppError::Storage("No row returned from insert".to_string()))
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let url = format!("{}?id={}", self.table_url, id_filter(id));
        let response = self.authorized(self.client.delete(url)).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SummaryRecord>> {
        let url = format!("{}?select=*&order=created_at.desc", self.table_url);
        let response = self.authorized(self.client.get(url)).send().await?;
        Ok(check(response).await?.json().await?)
    }
}
