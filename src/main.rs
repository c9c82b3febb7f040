use std::{sync::Arc, time::Duration};

mod app;
mod auth;
mod cart;
mod catalog;
mod checkout;
mod config;
mod db;
mod error;
mod session;
mod state;
#[cfg(test)]
mod testing;

use crate::{config::AppConfig, state::AppState};

const SESSION_PRUNE_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "myshop=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    let (pool, connected) = db::open(&config.db).await?;
    let state = AppState::from_pool(pool, config.clone());

    if connected {
        if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }
        if config.seed_sample_products {
            if let Err(e) = catalog::seed::seed_if_empty(state.catalog.as_ref()).await {
                tracing::warn!(error = %e, "seeding sample products failed; continuing");
            }
        }
    } else {
        tracing::warn!("skipping migrations and seed data until the database is reachable");
    }

    state.sessions.spawn_pruner(SESSION_PRUNE_INTERVAL);

    app::serve(app::build_app(state)).await
}
