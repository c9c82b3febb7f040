use serde::Serialize;
use uuid::Uuid;

use super::{model::PaymentMethod, repo_types::Order, services::PricedCart};

#[derive(Debug, Serialize)]
pub struct SummaryLine {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
}

/// Order summary shown above the checkout form.
#[derive(Debug, Serialize)]
pub struct CheckoutSummary {
    pub items: Vec<SummaryLine>,
    pub unavailable: Vec<Uuid>,
    pub total: i64,
    /// Pre-filled and read-only on the form.
    pub email: String,
    pub payment_methods: Vec<PaymentMethod>,
}

impl CheckoutSummary {
    pub fn new(priced: PricedCart, email: String) -> Self {
        Self {
            items: priced
                .items
                .into_iter()
                .map(|p| SummaryLine {
                    product_id: p.id,
                    name: p.name,
                    price: p.price,
                })
                .collect(),
            unavailable: priced.missing,
            total: priced.total,
            email,
            payment_methods: PaymentMethod::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    pub message: &'static str,
    pub order: Order,
}
