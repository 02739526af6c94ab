use anyhow::{Context, Result, bail};
use std::num::NonZeroU32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct StrikeConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
    // None means any origin may call the api
    pub cors_allowed_origin: Option<String>,
    pub log_format: LogFormat,
}

impl StrikeConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .context("Failed to determine DATABASE_URL from environment variables")?;

        let max_connections = match lookup("MAX_CONNECTIONS") {
            // a zero-sized pool panics inside sqlx, so refuse it here
            Some(val) => val
                .parse::<NonZeroU32>()
                .with_context(|| format!("MAX_CONNECTIONS must be a positive integer, got {val}"))?
                .get(),
            None => 15,
        };

        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|origin| !origin.is_empty());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            cors_allowed_origin,
            log_format,
        })
    }
}
