use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::utils::serde::empty_string_as_none;

/// A directory entry. Separate from [`crate::modules::users::model::User`]:
/// the directory lists the organisation's membership rolls, most of whom
/// never sign in.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub nation: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Query parameters for the member directory. Empty strings mean no filter,
/// matching how the frontend submits its search form.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MemberFilterParams {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub nation: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedMembersResponse {
    pub data: Vec<Member>,
    pub meta: PaginationMeta,
}

/// Member count per state, for the states overview page.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct StateSummary {
    pub state: Option<String>,
    pub members: i64,
}
