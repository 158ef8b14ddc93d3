use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{
    PaginatedUsersResponse, StatsResponse, UpdatePlanDto, UpdateRoleDto, User, UserFilterParams,
};
use super::service::UsersService;

/// List users (admin)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(
        ("role" = Option<String>, Query, description = "Filter by role (ordinary | admin)"),
        ("plan" = Option<String>, Query, description = "Filter by plan (free | premium)"),
        ("email" = Option<String>, Query, description = "Substring match on email"),
        ("limit" = Option<i64>, Query, description = "Page size (1-100)"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
    ),
    responses(
        (status = 200, description = "Paginated list of users", body = PaginatedUsersResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilterParams>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let (users, total) = UsersService::list_users(&state.db, &filter).await?;

    let limit = filter.pagination.limit();
    let offset = filter.pagination.offset();
    let meta = PaginationMeta {
        total,
        limit,
        offset: Some(offset),
        page: Some(filter.pagination.page()),
        has_more: offset + (users.len() as i64) < total,
    };

    Ok(Json(PaginatedUsersResponse { data: users, meta }))
}

/// Change a user's role (admin)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/role",
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_role(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(dto): Json<UpdateRoleDto>,
) -> Result<Json<User>, AppError> {
    let user = UsersService::update_role(&state.db, user_id, dto.role).await?;
    Ok(Json(user))
}

/// Change a user's membership plan (admin)
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/plan",
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn update_plan(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(dto): Json<UpdatePlanDto>,
) -> Result<Json<User>, AppError> {
    let user = UsersService::update_plan(&state.db, user_id, dto.plan).await?;
    Ok(Json(user))
}

/// Headline counts (admin)
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregate counts", body = StatsResponse),
        (status = 403, description = "Administrator access required", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn admin_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = UsersService::admin_stats(&state.db).await?;
    Ok(Json(stats))
}
