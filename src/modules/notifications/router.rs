use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::my_notifications;

pub fn init_notifications_router() -> Router<AppState> {
    Router::new().route("/", get(my_notifications))
}
