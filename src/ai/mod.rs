mod client;
mod summarizer;
mod translator;

pub use client::ClaudeClient;
pub use summarizer::Summarizer;
pub use translator::Translator;
