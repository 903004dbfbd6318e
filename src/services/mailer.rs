use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;
use crate::error::{AppError, Result};
use crate::models::FeedbackMessage;

/// Delivers feedback to the site operator.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_feedback(&self, feedback: &FeedbackMessage) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Notifier backed by the Resend transactional email API.
pub struct ResendMailer {
    client: Client,
    api_key: String,
    endpoint: String,
    from: String,
    to: String,
    subject: String,
}

impl ResendMailer {
    pub fn new(api_key: String, to: String, config: &FeedbackConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/emails", config.base_url.trim_end_matches('/')),
            from: config.from.clone(),
            to,
            subject: config.subject.clone(),
        })
    }
}

#[async_trait]
impl Notifier for ResendMailer {
    async fn send_feedback(&self, feedback: &FeedbackMessage) -> Result<()> {
        let request = SendEmailRequest {
            from: &self.from,
            to: &self.to,
            subject: &self.subject,
            html: feedback_html(feedback),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(AppError::Mail(format!("API error: {}", error_text)));
        }

        // Delivery is already accepted at this point; the body is informational.
        match response.json::<SendEmailResponse>().await {
            Ok(sent) => tracing::info!(email_id = ?sent.id, "Feedback email sent"),
            Err(e) => tracing::warn!("Feedback email sent, but the reply was unreadable: {}", e),
        }
        Ok(())
    }
}

pub(crate) fn feedback_html(feedback: &FeedbackMessage) -> String {
    format!(
        "<p><strong>From:</strong> {}</p><p>{}</p>",
        escape_html(&feedback.email),
        escape_html(&feedback.message)
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
