mod dto;
pub mod handlers;
pub mod model;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::cart_routes())
}
