use crate::auth::repo::{PgUserStore, UserStore};
use crate::catalog::repo::{CatalogStore, PgCatalogStore};
use crate::checkout::repo::{OrderStore, PgOrderStore};
use crate::config::AppConfig;
use crate::session::model::SessionRegistry;
use sqlx::PgPool;
use std::sync::Arc;
use time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub catalog: Arc<dyn CatalogStore>,
    pub orders: Arc<dyn OrderStore>,
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Postgres-backed stores sharing one pool.
    pub fn from_pool(db: PgPool, config: Arc<AppConfig>) -> Self {
        Self {
            sessions: sessions_for(&config),
            users: Arc::new(PgUserStore::new(db.clone())),
            catalog: Arc::new(PgCatalogStore::new(db.clone())),
            orders: Arc::new(PgOrderStore::new(db.clone())),
            db,
            config,
        }
    }

    #[cfg(test)]
    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        catalog: Arc<dyn CatalogStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            sessions: sessions_for(&config),
            db,
            config,
            users,
            catalog,
            orders,
        }
    }
}

/// A session lives as long as a refresh token issued from it could still be used.
fn sessions_for(config: &AppConfig) -> SessionRegistry {
    SessionRegistry::new(Duration::minutes(config.jwt.refresh_ttl_minutes))
}

#[cfg(test)]
impl AppState {
    /// In-memory stores and a lazily connecting pool; nothing touches a database.
    pub fn fake() -> Self {
        crate::testing::fake_state().0
    }
}
