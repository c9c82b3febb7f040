use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::DbConfig;

/// Failure of a store operation, classified by what the caller can do about it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Conflict(db.message().to_string())
            }
            _ => Self::Query(err.to_string()),
        }
    }
}

fn pool_options(cfg: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout())
}

/// Open the shared pool, retrying a fixed number of times with a fixed backoff.
///
/// Returns the pool and whether a connection was actually established. When
/// every attempt fails the pool is created lazily instead, so the service still
/// starts and requests touching the store fail with `ConnectionUnavailable`.
pub async fn open(cfg: &DbConfig) -> anyhow::Result<(PgPool, bool)> {
    match connect_with_retry(cfg).await {
        Ok(pool) => Ok((pool, true)),
        Err(e) => {
            error!(
                error = %e,
                attempts = cfg.connect_attempts,
                "database unreachable; starting in degraded mode"
            );
            let pool = pool_options(cfg).connect_lazy(&cfg.url)?;
            Ok((pool, false))
        }
    }
}

pub async fn connect_with_retry(cfg: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        match pool_options(cfg).connect(&cfg.url).await {
            Ok(pool) => {
                info!(attempt, "connected to database");
                return Ok(pool);
            }
            Err(e) if attempt < cfg.connect_attempts => {
                warn!(error = %e, attempt, "database connect failed; retrying");
                tokio::time::sleep(cfg.connect_backoff()).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

pub async fn ping(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
