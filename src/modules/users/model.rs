//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - the user entity as stored in the database
//! - [`UserRole`] - ordinary member or administrator
//! - [`UserPlan`] - free or premium membership
//!
//! # Request DTOs
//!
//! - [`UpdateRoleDto`] / [`UpdatePlanDto`] - admin updates to a single user
//! - [`UserFilterParams`] - query parameters for the admin user list
//!
//! Roles are deliberately coarse: administrators manage everything, ordinary
//! members see their own data. Finer-grained permissions have not been
//! needed so far.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::utils::pagination::{PaginationMeta, PaginationParams};
use crate::utils::serde::empty_string_as_none;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Ordinary,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Ordinary => "ordinary",
            UserRole::Admin => "admin",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "user_plan", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserPlan {
    Free,
    Premium,
}

impl UserPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserPlan::Free => "free",
            UserPlan::Premium => "premium",
        }
    }
}

/// A member account.
///
/// `notifications` is the append-only list of messages administrators have
/// sent to this user; newest entries are at the end.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub plan: UserPlan,
    pub notifications: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateRoleDto {
    pub role: UserRole,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
pub struct UpdatePlanDto {
    pub plan: UserPlan,
}

/// Query parameters for filtering the admin user list.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserFilterParams {
    pub role: Option<UserRole>,
    pub plan: Option<UserPlan>,
    /// Case-insensitive substring match on the email address.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedUsersResponse {
    pub data: Vec<User>,
    pub meta: PaginationMeta,
}

/// Headline counts for the admin dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_users: i64,
    pub premium_users: i64,
    pub admin_users: i64,
    pub total_events: i64,
    pub total_members: i64,
}
