use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use super::model::{PaymentMethod, ShippingInfo};

/// Stored order. Written once at checkout, never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_email: String,
    pub items: Vec<Uuid>,
    pub total: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub payment_method: String,
    pub status: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub user_email: String,
    pub items: Vec<Uuid>,
    pub total: i64,
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub status: &'static str,
}
