use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{StatsResponse, User, UserFilterParams, UserPlan, UserRole};

const USER_COLUMNS: &str = "id, email, role, plan, notifications, created_at, updated_at";

pub struct UsersService;

impl UsersService {
    /// Lists users matching the filter along with the total match count.
    #[instrument(skip(db))]
    pub async fn list_users(
        db: &PgPool,
        filter: &UserFilterParams,
    ) -> Result<(Vec<User>, i64), AppError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE ($1::user_role IS NULL OR role = $1)
               AND ($2::user_plan IS NULL OR plan = $2)
               AND ($3::text IS NULL OR email ILIKE '%' || $3 || '%')
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        ))
        .bind(filter.role)
        .bind(filter.plan)
        .bind(&filter.email)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM users
             WHERE ($1::user_role IS NULL OR role = $1)
               AND ($2::user_plan IS NULL OR plan = $2)
               AND ($3::text IS NULL OR email ILIKE '%' || $3 || '%')",
        )
        .bind(filter.role)
        .bind(filter.plan)
        .bind(&filter.email)
        .fetch_one(db)
        .await?;

        Ok((users, total))
    }

    #[instrument(skip(db))]
    pub async fn update_role(
        db: &PgPool,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET role = $2, updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(role)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id))
        })
    }

    #[instrument(skip(db))]
    pub async fn update_plan(
        db: &PgPool,
        user_id: Uuid,
        plan: UserPlan,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET plan = $2, updated_at = now()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(plan)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id))
        })
    }

    /// Headline counts shown on the admin dashboard.
    #[instrument(skip(db))]
    pub async fn admin_stats(db: &PgPool) -> Result<StatsResponse, AppError> {
        let total_users = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users")
            .fetch_one(db)
            .await?;
        let premium_users =
            sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users WHERE plan = 'premium'")
                .fetch_one(db)
                .await?;
        let admin_users =
            sqlx::query_scalar::<_, i64>("SELECT count(*) FROM users WHERE role = 'admin'")
                .fetch_one(db)
                .await?;
        let total_events = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM events")
            .fetch_one(db)
            .await?;
        let total_members = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM members")
            .fetch_one(db)
            .await?;

        Ok(StatsResponse {
            total_users,
            premium_users,
            admin_users,
            total_events,
            total_members,
        })
    }

    /// Loads a single user, used by the profile endpoints.
    pub async fn find_by_id(db: &PgPool, user_id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
