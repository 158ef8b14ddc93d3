use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{create_event, get_event, list_events, register_for_event};

pub fn init_events_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/{id}", get(get_event))
        .route("/{id}/register", post(register_for_event))
}

/// Routes nested under `/api/admin/events`.
pub fn init_admin_events_router() -> Router<AppState> {
    Router::new().route("/", post(create_event))
}
