use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::transliterate;

pub fn init_transliterate_router() -> Router<AppState> {
    Router::new().route("/", post(transliterate))
}
