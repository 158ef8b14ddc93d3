use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_order, verify_payment};

pub fn init_payments_router() -> Router<AppState> {
    Router::new()
        .route("/order", post(create_order))
        .route("/verify", post(verify_payment))
}
