use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::{AppError, Result};

const USER_AGENT_STRING: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
const TEXT_WIDTH: usize = 120;

// A content region shorter than this is probably a teaser; keep looking.
const MIN_REGION_CHARS: usize = 200;

const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".article-body",
    "#content",
];

/// Retrieves raw HTML for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STRING));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Fetch(format!("{} returned {}", url, response.status())));
        }

        Ok(response.text().await?)
    }
}

/// Reduce a page to its readable article text.
///
/// The first content region with enough text wins; otherwise the whole body
/// is used. Returns `EmptyContent` when nothing readable remains.
pub fn extract_article_text(html: &str, url: &str) -> Result<String> {
    let document = Html::parse_document(html);

    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = html_to_text(&element.html());
            if text.chars().count() >= MIN_REGION_CHARS {
                tracing::debug!("Extracted article text via '{}'", selector_str);
                return Ok(text);
            }
        }
    }

    let fallback = match Selector::parse("body") {
        Ok(body) => document
            .select(&body)
            .next()
            .map(|el| html_to_text(&el.html()))
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    let text = if fallback.is_empty() {
        html_to_text(html)
    } else {
        fallback
    };

    if text.is_empty() {
        return Err(AppError::EmptyContent(url.to_string()));
    }
    Ok(text)
}

fn html_to_text(html: &str) -> String {
    let text = match html2text::from_read(html.as_bytes(), TEXT_WIDTH) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!("Failed to convert HTML to text: {}", e);
            return String::new();
        }
    };

    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
