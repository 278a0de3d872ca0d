use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub xai_api_key: String,
    pub sendgrid_api_key: String,
    pub stripe_secret_key: String,
    pub twitter_bearer_token: String,
    pub crawl_interval_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            xai_api_key: require_env("XAI_API_KEY")?,
            sendgrid_api_key: require_env("SENDGRID_API_KEY")?,
            stripe_secret_key: require_env("STRIPE_SECRET_KEY")?,
            twitter_bearer_token: require_env("TWITTER_BEARER_TOKEN")?,
            crawl_interval_secs: std::env::var("CRAWL_INTERVAL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("CRAWL_INTERVAL_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
