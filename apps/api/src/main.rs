mod admin;
mod applications;
mod auth;
mod billing;
mod config;
mod email;
mod errors;
mod ingest;
mod insights;
mod jobs;
mod llm_client;
mod models;
mod resumes;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::SessionStore;
use crate::billing::StripeClient;
use crate::config::Config;
use crate::email::{Mailer, SendGridMailer};
use crate::ingest::TwitterClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{seed, MemStore, Store};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobPortal API v{}", env!("CARGO_PKG_VERSION"));

    // In-memory store, seeded with the development accounts
    let store: Arc<dyn Store> = Arc::new(MemStore::new());
    seed::seed_dev_users(store.as_ref()).await?;

    let sessions = SessionStore::new();
    let mailer: Arc<dyn Mailer> = Arc::new(SendGridMailer::new(config.sendgrid_api_key.clone()));
    let billing = StripeClient::new(config.stripe_secret_key.clone());

    let llm = LlmClient::new(config.xai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Background ingest loop, independent of request traffic
    let twitter = TwitterClient::new(config.twitter_bearer_token.clone());
    tokio::spawn(ingest::run_ingest_loop(
        store.clone(),
        sessions.clone(),
        twitter,
        llm.clone(),
        config.crawl_interval_secs,
    ));
    info!(
        "Ingest loop started (every {}s)",
        config.crawl_interval_secs
    );

    // Build app state
    let state = AppState {
        store,
        sessions,
        mailer,
        billing,
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
