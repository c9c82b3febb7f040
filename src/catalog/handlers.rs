use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use super::{
    dto::{FeaturedQuery, ProductDetails, ProductList},
    repo_types::ProductQuery,
};
use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

const MAX_FEATURED: i64 = 24;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/featured", get(featured_products))
        .route("/products/:id", get(get_product))
}

/// GET /products?q=&category=
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ProductList>> {
    let products = state.catalog.search(&query).await?;
    if products.is_empty() {
        warn!(q = ?query.text(), category = ?query.category(), "no products found");
    }
    let products: Vec<_> = products.into_iter().map(Into::into).collect();
    Ok(Json(ProductList {
        count: products.len(),
        products,
    }))
}

/// Public preview shown to visitors who are not logged in.
#[instrument(skip(state))]
pub async fn featured_products(
    State(state): State<AppState>,
    Query(q): Query<FeaturedQuery>,
) -> AppResult<Json<ProductList>> {
    let limit = q.limit.clamp(1, MAX_FEATURED);
    let products: Vec<_> = state
        .catalog
        .featured(limit)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(ProductList {
        count: products.len(),
        products,
    }))
}

#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductDetails>> {
    let product = state
        .catalog
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found!".into()))?;
    Ok(Json(product.into()))
}
