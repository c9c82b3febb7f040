use axum::{extract::State, routing::{get, put}, Json, Router};
use tracing::instrument;

use super::dto::{NavigateRequest, SelectProductRequest, SessionView};
use crate::{
    auth::extractors::ActiveSession,
    error::{AppError, AppResult},
    state::AppState,
};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(current))
        .route("/session/page", put(navigate))
        .route("/session/selection", put(select_product))
}

#[instrument(skip(session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn current(session: ActiveSession) -> Json<SessionView> {
    let s = session.handle.lock().await;
    Json(SessionView::from(&*s))
}

#[instrument(skip(session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn navigate(
    session: ActiveSession,
    Json(body): Json<NavigateRequest>,
) -> Json<SessionView> {
    let mut s = session.handle.lock().await;
    s.navigate(body.page);
    Json(SessionView::from(&*s))
}

/// Select a product for the detail page. The product must exist.
#[instrument(skip(state, session), fields(session_id = %session.id, user_id = %session.user_id))]
pub async fn select_product(
    State(state): State<AppState>,
    session: ActiveSession,
    Json(body): Json<SelectProductRequest>,
) -> AppResult<Json<SessionView>> {
    let mut s = session.handle.lock().await;
    if state.catalog.find_by_id(body.product_id).await?.is_none() {
        return Err(AppError::NotFound("Product not found!".into()));
    }
    s.select_product(body.product_id);
    Ok(Json(SessionView::from(&*s)))
}
