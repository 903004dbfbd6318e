use async_trait::async_trait;

use super::client::ClaudeClient;
use crate::error::Result;

/// Translates text into a target language named by a free-form label
/// ("Urdu", "French", ...). Whether the label is supported is up to the
/// provider.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

pub(crate) fn translation_system_prompt(target_language: &str) -> String {
    format!(
        "You are a professional translator. Translate the user's text into {}. \
         Preserve the meaning and paragraph structure. Reply with the translation only.",
        target_language
    )
}

#[async_trait]
impl Translator for ClaudeClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        self.complete(&translation_system_prompt(target_language), text).await
    }
}
