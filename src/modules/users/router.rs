use axum::{
    Router,
    routing::{get, patch},
};

use crate::modules::notifications::controller::push_notification;
use crate::state::AppState;

use super::controller::{list_users, update_plan, update_role};

/// Routes nested under `/api/admin/users`. The admin gate is applied by the
/// caller, not here.
pub fn init_admin_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{id}/role", patch(update_role))
        .route("/{id}/plan", patch(update_plan))
        .route("/{id}/notifications", axum::routing::post(push_notification))
}
