use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Product record. Prices are whole rupees and never negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub featured: bool,
    pub created_at: OffsetDateTime,
}

/// Product as supplied by seed data, before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: &'static str,
    pub price: i64,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
    pub stock: i32,
    pub featured: bool,
}

/// Catalog filter: case-insensitive substring over name or description, and an
/// exact category match. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductQuery {
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// `ILIKE` pattern for the text filter, with the LIKE metacharacters escaped
    /// so user input is matched literally.
    pub fn like_pattern(&self) -> Option<String> {
        self.text().map(|t| {
            let mut escaped = String::with_capacity(t.len() + 2);
            escaped.push('%');
            for c in t.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped.push('%');
            escaped
        })
    }

    /// In-memory equivalent of the store's search predicate.
    #[cfg(test)]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category() {
            if product.category.as_deref() != Some(category) {
                return false;
            }
        }
        match self.text() {
            None => true,
            Some(text) => {
                let needle = text.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
        }
    }
}
