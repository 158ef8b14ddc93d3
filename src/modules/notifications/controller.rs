use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{NotificationsResponse, PushNotificationDto};
use super::service::NotificationsService;

/// Notifications for the signed-in user
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "All notifications, oldest first", body = NotificationsResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Notifications"
)]
#[instrument(skip(state))]
pub async fn my_notifications(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<NotificationsResponse>, AppError> {
    let notifications = NotificationsService::list_for_user(&state.db, user.id).await?;
    Ok(Json(NotificationsResponse { notifications }))
}

/// Send a notification to a user (admin)
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/notifications",
    request_body = PushNotificationDto,
    responses(
        (status = 201, description = "Notification appended; full list returned", body = NotificationsResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, dto))]
pub async fn push_notification(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<PushNotificationDto>,
) -> Result<(StatusCode, Json<NotificationsResponse>), AppError> {
    let notifications = NotificationsService::push(&state.db, user_id, &dto.message).await?;
    Ok((
        StatusCode::CREATED,
        Json(NotificationsResponse { notifications }),
    ))
}
