use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use blog_digest::ai::ClaudeClient;
use blog_digest::config::{Config, Credentials};
use blog_digest::db::{RestStore, SqliteStore, SummaryStore};
use blog_digest::pipeline::SummaryPipeline;
use blog_digest::services::{HttpPageFetcher, Notifier, ResendMailer};
use blog_digest::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting blog-digest v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().context("loading config")?;
    let credentials = Credentials::from_env()?;

    let ai = Arc::new(ClaudeClient::new(
        credentials.anthropic_api_key.clone(),
        &config.ai,
    )?);
    info!("Using model {}", ai.model_version());

    let fetcher = Arc::new(HttpPageFetcher::new(Duration::from_secs(
        config.http.fetch_timeout_secs,
    ))?);
    let pipeline = Arc::new(SummaryPipeline::new(fetcher, ai.clone(), ai));

    let store: Arc<dyn SummaryStore> = match &credentials.supabase {
        Some(supabase) => {
            info!("Using managed store at {}", supabase.url);
            Arc::new(RestStore::new(
                supabase,
                Duration::from_secs(config.storage.timeout_secs),
            )?)
        }
        None => {
            info!("Using local store at {}", config.storage.db_path);
            Arc::new(SqliteStore::new(&config.storage.db_path).await?)
        }
    };

    let notifier: Option<Arc<dyn Notifier>> =
        match (credentials.resend_api_key.clone(), config.feedback.to.clone()) {
            (Some(key), Some(to)) => Some(Arc::new(ResendMailer::new(key, to, &config.feedback)?)),
            (None, _) => {
                warn!("RESEND_API_KEY not set, feedback delivery disabled");
                None
            }
            (Some(_), None) => {
                warn!("feedback.to not configured, feedback delivery disabled");
                None
            }
        };

    let state = AppState::new(pipeline, store, notifier, config.default_language.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!("blog-digest listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
