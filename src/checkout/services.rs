use std::collections::HashMap;

use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::{
    model::{PaymentMethod, ShippingInfo, ORDER_STATUS_CONFIRMED},
    repo::OrderStore,
    repo_types::{NewOrder, Order},
};
use crate::{
    catalog::{repo::CatalogStore, repo_types::Product},
    error::{AppError, AppResult},
    session::model::{Page, Session},
};

/// Cart contents priced against the current catalog.
#[derive(Debug, Clone)]
pub struct PricedCart {
    /// Products that still exist, in cart order.
    pub items: Vec<Product>,
    /// Cart identifiers that no longer resolve to a product.
    pub missing: Vec<Uuid>,
    /// Sum of `items` prices; missing identifiers contribute nothing.
    pub total: i64,
}

/// Look up every identifier's current product and price.
pub async fn resolve_prices(catalog: &dyn CatalogStore, ids: &[Uuid]) -> AppResult<PricedCart> {
    let mut found: HashMap<Uuid, Product> = catalog
        .find_by_ids(ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let mut items = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for id in ids {
        match found.remove(id) {
            Some(product) => items.push(product),
            None => missing.push(*id),
        }
    }
    let total = items
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.price))
        .ok_or_else(|| AppError::ValidationFailed("Cart total is too large".into()))?;
    Ok(PricedCart {
        items,
        missing,
        total,
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub shipping: ShippingInfo,
    #[serde(default)]
    pub payment_method: String,
}

/// Turn the session's cart into a confirmed order.
///
/// Nothing is written unless the cart is non-empty, every shipping field is
/// filled, the payment method is known and every cart item still exists. On
/// success the cart is cleared and the session returns to the home page.
pub async fn place_order(
    catalog: &dyn CatalogStore,
    orders: &dyn OrderStore,
    session: &mut Session,
    form: &CheckoutForm,
) -> AppResult<Order> {
    let ids = session.cart.list().to_vec();
    if ids.is_empty() {
        return Err(AppError::ValidationFailed("Your cart is empty!".into()));
    }

    let priced = resolve_prices(catalog, &ids).await?;

    form.shipping.validate()?;
    let payment_method: PaymentMethod = form.payment_method.parse()?;

    if !priced.missing.is_empty() {
        warn!(
            user_id = %session.user.id,
            missing = ?priced.missing,
            "checkout blocked by missing products"
        );
        let listed: Vec<String> = priced.missing.iter().map(Uuid::to_string).collect();
        return Err(AppError::NotFound(format!(
            "Some items in your cart are no longer available, please remove them: {}",
            listed.join(", ")
        )));
    }

    let order = orders
        .insert(&NewOrder {
            user_id: session.user.id,
            user_email: session.user.email.clone(),
            items: ids,
            total: priced.total,
            shipping: form.shipping.trimmed(),
            payment_method,
            status: ORDER_STATUS_CONFIRMED,
        })
        .await?;

    info!(
        order_id = %order.id,
        user_id = %order.user_id,
        total = order.total,
        items = order.items.len(),
        payment_method = %payment_method,
        "order placed"
    );

    session.cart.clear();
    session.navigate(Page::Home);
    Ok(order)
}
