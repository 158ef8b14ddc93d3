use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::avatar;

pub fn init_avatar_router() -> Router<AppState> {
    Router::new().route("/", get(avatar))
}
