use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo_types::Product;

const NO_DESCRIPTION: &str = "No description";

#[derive(Debug, Serialize)]
pub struct ProductCard {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl From<Product> for ProductCard {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            description: p.description.unwrap_or_else(|| NO_DESCRIPTION.into()),
            image_url: p.image_url,
            category: p.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetails {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub featured: bool,
    /// Search link for the same product on an external marketplace.
    pub marketplace_url: String,
}

impl From<Product> for ProductDetails {
    fn from(p: Product) -> Self {
        let marketplace_url = marketplace_url(&p.name);
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            description: p
                .description
                .unwrap_or_else(|| "No description available.".into()),
            image_url: p.image_url,
            category: p.category,
            stock: p.stock,
            featured: p.featured,
            marketplace_url,
        }
    }
}

pub fn marketplace_url(name: &str) -> String {
    format!("https://www.amazon.in/s?k={}", name.replace(' ', "+"))
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<ProductCard>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    #[serde(default = "default_featured_limit")]
    pub limit: i64,
}

fn default_featured_limit() -> i64 {
    3
}
