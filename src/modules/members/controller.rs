use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

use super::model::{MemberFilterParams, PaginatedMembersResponse, StateSummary};
use super::service::MembersService;

/// Member directory
#[utoipa::path(
    get,
    path = "/api/members",
    params(
        ("state" = Option<String>, Query, description = "Filter by state"),
        ("city" = Option<String>, Query, description = "Filter by city"),
        ("nation" = Option<String>, Query, description = "Filter by nation"),
        ("limit" = Option<i64>, Query, description = "Page size (1-100)"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
    ),
    responses(
        (status = 200, description = "Paginated member directory", body = PaginatedMembersResponse)
    ),
    tag = "Members"
)]
#[instrument(skip(state))]
pub async fn list_members(
    State(state): State<AppState>,
    Query(filter): Query<MemberFilterParams>,
) -> Result<Json<PaginatedMembersResponse>, AppError> {
    let (members, total) = MembersService::list_members(&state.db, &filter).await?;

    let limit = filter.pagination.limit();
    let offset = filter.pagination.offset();
    let meta = PaginationMeta {
        total,
        limit,
        offset: Some(offset),
        page: Some(filter.pagination.page()),
        has_more: offset + (members.len() as i64) < total,
    };

    Ok(Json(PaginatedMembersResponse {
        data: members,
        meta,
    }))
}

/// Member counts by state
#[utoipa::path(
    get,
    path = "/api/members/states",
    responses(
        (status = 200, description = "Member count per state", body = Vec<StateSummary>)
    ),
    tag = "Members"
)]
#[instrument(skip(state))]
pub async fn states_rollup(
    State(state): State<AppState>,
) -> Result<Json<Vec<StateSummary>>, AppError> {
    let summaries = MembersService::states_rollup(&state.db).await?;
    Ok(Json(summaries))
}
