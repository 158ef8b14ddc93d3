use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{list_members, states_rollup};

pub fn init_members_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_members))
        .route("/states", get(states_rollup))
}
