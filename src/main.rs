use crate::config::StrikeConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::{RosterRepository, SeriesRepository, SubstitutionRepository};
use crate::services::{SeriesService, SubstitutionLog};
use anyhow::Context;
use axum::Router;
use axum::http::HeaderValue;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
mod database;
mod domain;
mod features;
mod services;
mod stats;
mod telemetry;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub series: Arc<SeriesService>,
    pub substitutions: Arc<SubstitutionLog>,
    pub roster: Arc<dyn RosterRepository>,
}

impl AppState {
    pub fn new(
        series_repo: Arc<dyn SeriesRepository>,
        substitution_repo: Arc<dyn SubstitutionRepository>,
        roster: Arc<dyn RosterRepository>,
    ) -> Self {
        Self {
            series: Arc::new(SeriesService::new(series_repo)),
            substitutions: Arc::new(SubstitutionLog::new(substitution_repo)),
            roster,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let config = StrikeConfig::from_env()?;
    telemetry::init_tracing(config.log_format);

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        info!(database_url = %config.database_url, "Database not found, creating");
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
    }

    // connect to our db
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    // one sqlite repository backs every port
    let repo = Arc::new(SqliteRepository::new(pool));
    let app_state = AppState::new(repo.clone(), repo.clone(), repo);

    let app = Router::new()
        .nest("/api", features::api_router())
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!(address = %config.bind_address, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &StrikeConfig) -> anyhow::Result<CorsLayer> {
    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("CORS_ALLOWED_ORIGIN is not a valid origin: {origin}"))?;
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}
