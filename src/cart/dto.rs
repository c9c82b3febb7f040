use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::AddOutcome;
use crate::{catalog::repo_types::Product, checkout::services::PricedCart};

const EXCERPT_CHARS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub excerpt: String,
    pub quantity: u32,
}

impl From<&Product> for CartLine {
    fn from(p: &Product) -> Self {
        Self {
            product_id: p.id,
            name: p.name.clone(),
            price: p.price,
            excerpt: excerpt(p.description.as_deref().unwrap_or_default()),
            quantity: 1,
        }
    }
}

fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLine>,
    /// Identifiers in the cart whose product no longer exists.
    pub unavailable: Vec<Uuid>,
    pub total: i64,
    pub count: usize,
}

impl From<&PricedCart> for CartView {
    fn from(priced: &PricedCart) -> Self {
        Self {
            items: priced.items.iter().map(CartLine::from).collect(),
            unavailable: priced.missing.clone(),
            total: priced.total,
            count: priced.items.len() + priced.missing.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub outcome: AddOutcome,
    pub message: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CartChanged {
    pub message: &'static str,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_on_characters() {
        let long = "₹".repeat(60);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(excerpt("short"), "short...");
    }
}
