use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cart::model::Cart;

pub type SessionId = Uuid;

/// A session is locked for the whole request that uses it.
pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    ProductDetail,
    Cart,
    Checkout,
}

/// Identity of the logged-in user, copied into the session at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

#[derive(Debug)]
pub struct Session {
    pub user: CurrentUser,
    pub page: Page,
    pub selected_product: Option<Uuid>,
    pub cart: Cart,
}

impl Session {
    pub fn new(user: CurrentUser) -> Self {
        Self {
            user,
            page: Page::Home,
            selected_product: None,
            cart: Cart::new(),
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn select_product(&mut self, product_id: Uuid) {
        self.selected_product = Some(product_id);
        self.page = Page::ProductDetail;
    }
}

struct Entry {
    handle: SessionHandle,
    last_seen: OffsetDateTime,
}

/// Live sessions keyed by the id carried in the caller's token.
///
/// A session untouched for longer than `idle_ttl` is dropped: by the next lookup
/// that finds it, or by [`SessionRegistry::prune`].
#[derive(Clone)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<SessionId, Entry>>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            idle_ttl,
        }
    }

    pub async fn open(&self, user: CurrentUser) -> SessionId {
        let id = Uuid::new_v4();
        let user_id = user.id;
        let entry = Entry {
            handle: Arc::new(Mutex::new(Session::new(user))),
            last_seen: OffsetDateTime::now_utc(),
        };
        self.inner.write().await.insert(id, entry);
        debug!(session_id = %id, %user_id, "session opened");
        id
    }

    /// Looks up a session and marks it as used.
    pub async fn get(&self, id: SessionId) -> Option<SessionHandle> {
        self.get_at(id, OffsetDateTime::now_utc()).await
    }

    async fn get_at(&self, id: SessionId, now: OffsetDateTime) -> Option<SessionHandle> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id)?;
        if now - entry.last_seen > self.idle_ttl {
            sessions.remove(&id);
            debug!(session_id = %id, "session expired");
            return None;
        }
        entry.last_seen = now;
        Some(entry.handle.clone())
    }

    /// Drops the session and everything in it, cart included.
    pub async fn close(&self, id: SessionId) -> bool {
        let removed = self.inner.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "session closed");
        }
        removed
    }

    /// Removes every expired session. Returns how many were dropped.
    pub async fn prune(&self) -> usize {
        self.prune_at(OffsetDateTime::now_utc()).await
    }

    async fn prune_at(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_seen <= self.idle_ttl);
        let pruned = before - sessions.len();
        if pruned > 0 {
            info!(pruned, remaining = sessions.len(), "expired sessions pruned");
        }
        pruned
    }

    /// Prune on a fixed period for the life of the process.
    pub fn spawn_pruner(&self, every: std::time::Duration) {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(every);
            loop {
                tick.tick().await;
                registry.prune().await;
            }
        });
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
