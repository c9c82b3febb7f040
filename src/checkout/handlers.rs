use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::instrument;

use super::{
    dto::{CheckoutSummary, OrderConfirmation},
    services::{self, resolve_prices, CheckoutForm},
};
use crate::{
    auth::extractors::ActiveSession,
    error::{AppError, AppResult},
    session::model::Page,
    state::AppState,
};

pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/checkout", get(summary).post(place_order))
}

#[instrument(skip(state, session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn summary(
    State(state): State<AppState>,
    session: ActiveSession,
) -> AppResult<Json<CheckoutSummary>> {
    let mut s = session.handle.lock().await;
    if s.cart.is_empty() {
        return Err(AppError::ValidationFailed("Your cart is empty!".into()));
    }
    let priced = resolve_prices(state.catalog.as_ref(), s.cart.list()).await?;
    s.navigate(Page::Checkout);
    Ok(Json(CheckoutSummary::new(priced, s.user.email.clone())))
}

/// The session stays locked from pricing through the order write.
#[instrument(
    skip(state, session, form),
    fields(session_id = %session.id, user_id = %session.user_id)
)]
pub async fn place_order(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(form): Json<CheckoutForm>,
) -> AppResult<(StatusCode, Json<OrderConfirmation>)> {
    let mut s = session.handle.lock().await;
    let order = services::place_order(
        state.catalog.as_ref(),
        state.orders.as_ref(),
        &mut s,
        &form,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(OrderConfirmation {
            message: "Order placed successfully!",
            order,
        }),
    ))
}
