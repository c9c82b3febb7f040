use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewProduct, Product, ProductQuery};
use crate::db::StoreError;

/// Read side of the catalog plus the bulk insert used for seed data.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Matching products in insertion order.
    async fn search(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError>;
    /// Featured products first, each group in insertion order.
    async fn featured(&self, limit: i64) -> Result<Vec<Product>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;
    /// Products whose id is in `ids`, in no particular order. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, StoreError>;
    async fn count(&self) -> Result<i64, StoreError>;
    async fn insert_many(&self, products: &[NewProduct]) -> Result<u64, StoreError>;
}

const PRODUCT_COLUMNS: &str =
    "id, name, price, description, image_url, category, stock, featured, created_at";

#[derive(Clone)]
pub struct PgCatalogStore {
    db: PgPool,
}

impl PgCatalogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn search(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::text IS NULL OR name ILIKE $1 OR description ILIKE $1)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY position
            "#
        );
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(query.like_pattern())
            .bind(query.category())
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn featured(&self, limit: i64) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            ORDER BY featured DESC, position
            LIMIT $1
            "#
        );
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(ids)
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await?;
        Ok(n)
    }

    async fn insert_many(&self, products: &[NewProduct]) -> Result<u64, StoreError> {
        let mut tx = self.db.begin().await?;
        let mut inserted = 0;
        for p in products {
            inserted += sqlx::query(
                r#"
                INSERT INTO products
                    (name, price, description, image_url, category, stock, featured)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(p.name)
            .bind(p.price)
            .bind(p.description)
            .bind(p.image_url)
            .bind(p.category)
            .bind(p.stock)
            .bind(p.featured)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }
}
