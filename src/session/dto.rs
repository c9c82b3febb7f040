use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{Page, Session};

/// What the client needs to draw its navigation: who, where, and the cart badge.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub email: String,
    pub page: Page,
    pub selected_product: Option<Uuid>,
    pub cart_count: usize,
}

impl From<&Session> for SessionView {
    fn from(s: &Session) -> Self {
        Self {
            email: s.user.email.clone(),
            page: s.page,
            selected_product: s.selected_product,
            cart_count: s.cart.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

#[derive(Debug, Deserialize)]
pub struct SelectProductRequest {
    pub product_id: Uuid,
}
