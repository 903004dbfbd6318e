use async_trait::async_trait;

use super::client::{truncate_chars, ClaudeClient};
use crate::error::Result;

const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a helpful assistant that summarizes blog posts.
Provide a concise, informative summary in 2-3 paragraphs.
Focus on the key ideas, main arguments, and important conclusions.
Use clear, accessible language and write in English."#;

/// Produces a natural-language summary of article text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, article_text: &str) -> Result<String>;
}

pub(crate) fn summary_prompt(article_text: &str) -> String {
    format!("Please summarize the following blog post:\n\n{}", article_text)
}

#[async_trait]
impl Summarizer for ClaudeClient {
    async fn summarize(&self, article_text: &str) -> Result<String> {
        let content = truncate_chars(article_text, self.max_input_chars());
        self.complete(SUMMARY_SYSTEM_PROMPT, &summary_prompt(content)).await
    }
}
