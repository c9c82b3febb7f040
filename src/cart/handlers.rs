use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    dto::{AddToCartRequest, AddToCartResponse, CartChanged, CartView},
    model::AddOutcome,
};
use crate::{
    auth::extractors::ActiveSession,
    checkout::services::resolve_prices,
    error::AppResult,
    session::model::Page,
    state::AppState,
};

pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(view_cart).delete(clear_cart))
        .route("/cart/items", post(add_item))
        .route("/cart/items/:product_id", delete(remove_item))
}

/// Cart page: items priced against the current catalog.
#[instrument(skip(state, session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn view_cart(
    State(state): State<AppState>,
    session: ActiveSession,
) -> AppResult<Json<CartView>> {
    let mut s = session.handle.lock().await;
    let priced = resolve_prices(state.catalog.as_ref(), s.cart.list()).await?;
    s.navigate(Page::Cart);
    Ok(Json(CartView::from(&priced)))
}

/// Adding is not checked against the catalog; a duplicate is reported, not an error.
#[instrument(skip(session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn add_item(
    session: ActiveSession,
    Json(body): Json<AddToCartRequest>,
) -> (StatusCode, Json<AddToCartResponse>) {
    let mut s = session.handle.lock().await;
    let outcome = s.cart.add(body.product_id);
    debug!(product_id = %body.product_id, ?outcome, "add to cart");
    let (status, message) = match outcome {
        AddOutcome::Added => (StatusCode::CREATED, "Added to cart!"),
        AddOutcome::AlreadyInCart => (StatusCode::OK, "Item already in cart!"),
    };
    (
        status,
        Json(AddToCartResponse {
            outcome,
            message,
            count: s.cart.len(),
        }),
    )
}

#[instrument(skip(session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn remove_item(
    session: ActiveSession,
    Path(product_id): Path<Uuid>,
) -> Json<CartChanged> {
    let mut s = session.handle.lock().await;
    let removed = s.cart.remove(product_id);
    debug!(%product_id, removed, "remove from cart");
    Json(CartChanged {
        message: "Removed from cart!",
        count: s.cart.len(),
    })
}

#[instrument(skip(session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn clear_cart(session: ActiveSession) -> Json<CartChanged> {
    let mut s = session.handle.lock().await;
    s.cart.clear();
    Json(CartChanged {
        message: "Cart cleared",
        count: 0,
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    use crate::testing::{add_to_cart, delete_as, get_as, logged_in, seeded_state};

    #[tokio::test]
    async fn add_twice_keeps_one_and_signals_duplicate() {
        let (state, _) = seeded_state().await;
        let token = logged_in(&state, "cart@shop.in").await;
        let id = Uuid::new_v4();

        let (status, body) = add_to_cart(&state, &token, id).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["outcome"], "added");

        let (status, body) = add_to_cart(&state, &token, id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "already_in_cart");
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn view_prices_items_and_flags_unavailable_ones() {
        let (state, fakes) = seeded_state().await;
        let token = logged_in(&state, "view@shop.in").await;
        let webcam = fakes.catalog.id_of("4K Webcam");
        let keyboard = fakes.catalog.id_of("Mechanical Keyboard RGB");
        let gone = Uuid::new_v4();

        for id in [webcam, gone, keyboard] {
            add_to_cart(&state, &token, id).await;
        }

        let (status, body) = get_as(&state, &token, "/api/v1/cart").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 12_999 + 8_999);
        assert_eq!(body["count"], 3);
        assert_eq!(body["items"][0]["name"], "4K Webcam");
        assert_eq!(body["items"][1]["name"], "Mechanical Keyboard RGB");
        assert_eq!(body["items"][0]["quantity"], 1);
        assert_eq!(body["unavailable"], json!([gone]));

        let (_, session) = get_as(&state, &token, "/api/v1/session").await;
        assert_eq!(session["page"], "cart");
    }

    #[tokio::test]
    async fn failed_cart_view_leaves_the_page_alone() {
        let (state, fakes) = seeded_state().await;
        let token = logged_in(&state, "down@shop.in").await;
        add_to_cart(&state, &token, fakes.catalog.id_of("4K Webcam")).await;

        fakes.catalog.set_unavailable(true);
        let (status, _) = get_as(&state, &token, "/api/v1/cart").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (_, session) = get_as(&state, &token, "/api/v1/session").await;
        assert_eq!(session["page"], "home");
    }

    #[tokio::test]
    async fn remove_absent_and_clear_are_quiet() {
        let (state, _) = seeded_state().await;
        let token = logged_in(&state, "rm@shop.in").await;
        add_to_cart(&state, &token, Uuid::new_v4()).await;

        let absent = format!("/api/v1/cart/items/{}", Uuid::new_v4());
        let (status, body) = delete_as(&state, &token, &absent).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);

        let (status, body) = delete_as(&state, &token, "/api/v1/cart").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);

        let (_, body) = get_as(&state, &token, "/api/v1/cart").await;
        assert_eq!(body["items"], json!([]));
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn carts_are_per_session() {
        let (state, _) = seeded_state().await;
        let alice = logged_in(&state, "alice@shop.in").await;
        let bob = logged_in(&state, "bob@shop.in").await;

        add_to_cart(&state, &alice, Uuid::new_v4()).await;

        let (_, body) = get_as(&state, &bob, "/api/v1/cart").await;
        assert_eq!(body["count"], 0);
    }
}
