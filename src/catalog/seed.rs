use tracing::info;

use super::{repo::CatalogStore, repo_types::NewProduct};
use crate::db::StoreError;

pub const SAMPLE_PRODUCTS: &[NewProduct] = &[
    NewProduct {
        name: "MacBook Pro 14-inch",
        price: 199_900,
        description: "Apple MacBook Pro with M2 Pro chip, 16GB RAM, 512GB SSD. Perfect for professionals and creatives.",
        image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 15,
        featured: true,
    },
    NewProduct {
        name: "iPhone 15 Pro",
        price: 134_900,
        description: "Latest iPhone with A17 Pro chip, 128GB storage, and advanced camera system.",
        image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 25,
        featured: true,
    },
    NewProduct {
        name: "Sony WH-1000XM5",
        price: 29_990,
        description: "Industry-leading noise canceling wireless headphones with 30-hour battery life.",
        image_url: "https://images.unsplash.com/photo-1546435770-a3e426bf472b?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 30,
        featured: false,
    },
    NewProduct {
        name: "Dell XPS 13",
        price: 89_990,
        description: "Ultra-thin laptop with Intel Core i7, 16GB RAM, and stunning InfinityEdge display.",
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 12,
        featured: false,
    },
    NewProduct {
        name: "Samsung Galaxy Tab S9",
        price: 72_999,
        description: "Premium Android tablet with S Pen, perfect for productivity and entertainment.",
        image_url: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 20,
        featured: true,
    },
    NewProduct {
        name: "Canon EOS R6 Mark II",
        price: 239_999,
        description: "Professional mirrorless camera with 24.2MP sensor and 4K video recording.",
        image_url: "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 8,
        featured: false,
    },
    NewProduct {
        name: "Gaming Chair Pro",
        price: 24_999,
        description: "Ergonomic gaming chair with lumbar support, adjustable armrests, and premium materials.",
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
        category: "Furniture",
        stock: 18,
        featured: false,
    },
    NewProduct {
        name: "Mechanical Keyboard RGB",
        price: 8_999,
        description: "Premium mechanical keyboard with RGB backlighting and tactile switches.",
        image_url: "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 35,
        featured: false,
    },
    NewProduct {
        name: "4K Webcam",
        price: 12_999,
        description: "Ultra HD webcam with auto-focus and noise-canceling microphone for streaming.",
        image_url: "https://images.unsplash.com/photo-1587614382346-4ec70e388b28?w=400&h=300&fit=crop",
        category: "Electronics",
        stock: 22,
        featured: false,
    },
];

/// Insert the sample products when the catalog is empty. Returns how many were added.
pub async fn seed_if_empty(catalog: &dyn CatalogStore) -> Result<u64, StoreError> {
    let existing = catalog.count().await?;
    if existing > 0 {
        info!(existing, "catalog already populated; skipping seed");
        return Ok(0);
    }
    let inserted = catalog.insert_many(SAMPLE_PRODUCTS).await?;
    info!(inserted, "seeded sample products");
    Ok(inserted)
}
