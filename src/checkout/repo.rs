use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{NewOrder, Order};
use crate::db::StoreError;

/// Append-only order store. There is no read-back, update or delete path.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: &NewOrder) -> Result<Order, StoreError>;
}

#[derive(Clone)]
pub struct PgOrderStore {
    db: PgPool,
}

impl PgOrderStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (
                user_id, user_email, items, total,
                first_name, last_name, phone, address, city, pincode,
                payment_method, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, user_id, user_email, items, total,
                      first_name, last_name, phone, address, city, pincode,
                      payment_method, status, created_at
            "#,
        )
        .bind(order.user_id)
        .bind(&order.user_email)
        .bind(&order.items)
        .bind(order.total)
        .bind(&order.shipping.first_name)
        .bind(&order.shipping.last_name)
        .bind(&order.shipping.phone)
        .bind(&order.shipping.address)
        .bind(&order.shipping.city)
        .bind(&order.shipping.pincode)
        .bind(order.payment_method.label())
        .bind(order.status)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }
}
