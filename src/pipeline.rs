//! The fetch → extract → summarize → translate chain.
//!
//! Steps run strictly in order. The first failure aborts the run; the cause
//! is logged here and the caller only learns that summarization failed.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};
use url::Url;

use crate::ai::{Summarizer, Translator};
use crate::error::AppError;
use crate::models::SummaryResult;
use crate::services::content_fetcher::{extract_article_text, PageFetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Fetch,
    Extract,
    Summarize,
    Translate,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStep::Fetch => "fetch",
            PipelineStep::Extract => "extract",
            PipelineStep::Summarize => "summarize",
            PipelineStep::Translate => "translate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing URL")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Missing language")]
    MissingLanguage,

    #[error("Summarization failed")]
    Failed { step: PipelineStep, source: AppError },
}

impl PipelineError {
    pub fn is_input_error(&self) -> bool {
        !matches!(self, PipelineError::Failed { .. })
    }
}

pub struct SummaryPipeline {
    fetcher: Arc<dyn PageFetcher>,
    summarizer: Arc<dyn Summarizer>,
    translator: Arc<dyn Translator>,
}

impl SummaryPipeline {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        summarizer: Arc<dyn Summarizer>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            fetcher,
            summarizer,
            translator,
        }
    }

    pub async fn summarize_blog(
        &self,
        url: &str,
        target_language: &str,
    ) -> Result<SummaryResult, PipelineError> {
        let url = validate_url(url)?;
        let target_language = target_language.trim();
        if target_language.is_empty() {
            return Err(PipelineError::MissingLanguage);
        }

        info!(url = %url, language = %target_language, "Summarizing blog");

        let html = self
            .fetcher
            .fetch_html(url.as_str())
            .await
            .map_err(|e| fail(PipelineStep::Fetch, &url, e))?;

        let article = extract_article_text(&html, url.as_str())
            .map_err(|e| fail(PipelineStep::Extract, &url, e))?;

        let summary = self
            .summarizer
            .summarize(&article)
            .await
            .map_err(|e| fail(PipelineStep::Summarize, &url, e))?;

        let translated = self
            .translator
            .translate(&summary, target_language)
            .await
            .map_err(|e| fail(PipelineStep::Translate, &url, e))?;

        info!(
            url = %url,
            summary_chars = summary.chars().count(),
            translated_chars = translated.chars().count(),
            "Blog summarized"
        );

        Ok(SummaryResult {
            summary,
            translated,
        })
    }
}

fn validate_url(raw: &str) -> Result<Url, PipelineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(PipelineError::MissingUrl);
    }
    let url = Url::parse(raw).map_err(|_| PipelineError::InvalidUrl)?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(url),
        _ => Err(PipelineError::InvalidUrl),
    }
}

fn fail(step: PipelineStep, url: &Url, source: AppError) -> PipelineError {
    error!(url = %url, step = %step, error = %source, "Summarization pipeline failed");
    PipelineError::Failed { step, source }
}
