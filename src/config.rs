use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

const CONFIG_PATH_VAR: &str = "BLOG_DIGEST_CONFIG";

/// Non-secret settings, read from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_ai_model")]
    pub model: String,
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    #[serde(default = "default_ai_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Operator address that receives every feedback message.
    pub to: Option<String>,
    #[serde(default = "default_feedback_from")]
    pub from: String,
    #[serde(default = "default_feedback_subject")]
    pub subject: String,
    #[serde(default = "default_mail_base_url")]
    pub base_url: String,
    #[serde(default = "default_mail_timeout")]
    pub timeout_secs: u64,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_language() -> String {
    "Urdu".to_string()
}

fn default_ai_model() -> String {
    "claude-3-5-haiku-20241022".to_string()
}

fn default_ai_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_max_input_chars() -> usize {
    10_000
}

fn default_ai_timeout() -> u64 {
    60
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blog-digest")
        .join("summaries.db")
        .to_string_lossy()
        .to_string()
}

fn default_store_timeout() -> u64 {
    15
}

fn default_feedback_from() -> String {
    "Blog Digest <onboarding@resend.dev>".to_string()
}

fn default_feedback_subject() -> String {
    "New Blog Digest Feedback!".to_string()
}

fn default_mail_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_mail_timeout() -> u64 {
    15
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_ai_model(),
            base_url: default_ai_base_url(),
            max_input_chars: default_max_input_chars(),
            timeout_secs: default_ai_timeout(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            timeout_secs: default_store_timeout(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            to: None,
            from: default_feedback_from(),
            subject: default_feedback_subject(),
            base_url: default_mail_base_url(),
            timeout_secs: default_mail_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            default_language: default_language(),
            ai: AiConfig::default(),
            http: HttpConfig::default(),
            storage: StorageConfig::default(),
            feedback: FeedbackConfig::default(),
        }
    }
}

impl Config {
    /// Load settings from the config file, falling back to defaults when it
    /// does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            tracing::info!("No config file at {}, using defaults", config_path.display());
            Ok(Config::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.default_language.trim().is_empty() {
            return Err(AppError::Config("default_language must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blog-digest")
            .join("config.toml")
    }
}

/// Credentials for the hosted services. Only ever sourced from the
/// environment.
#[derive(Clone)]
pub struct Credentials {
    pub anthropic_api_key: String,
    pub supabase: Option<SupabaseCredentials>,
    pub resend_api_key: Option<String>,
}

#[derive(Clone)]
pub struct SupabaseCredentials {
    pub url: String,
    pub service_role_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("anthropic_api_key", &"<redacted>")
            .field("supabase", &self.supabase.as_ref().map(|s| &s.url))
            .field("resend_api_key", &self.resend_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let anthropic_api_key = get("ANTHROPIC_API_KEY")
            .ok_or_else(|| AppError::Config("ANTHROPIC_API_KEY is not set".to_string()))?;

        let supabase = match (get("SUPABASE_URL"), get("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(url), Some(service_role_key)) => Some(SupabaseCredentials {
                url,
                service_role_key,
            }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "Only one of SUPABASE_URL / SUPABASE_SERVICE_ROLE_KEY is set, using local store"
                );
                None
            }
            (None, None) => None,
        };

        Ok(Self {
            anthropic_api_key,
            supabase,
            resend_api_key: get("RESEND_API_KEY"),
        })
    }
}
