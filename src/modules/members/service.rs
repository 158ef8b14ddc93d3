use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{Member, MemberFilterParams, StateSummary};

const MEMBER_COLUMNS: &str = "id, name, city, state, nation, created_at";

pub struct MembersService;

impl MembersService {
    /// Directory page matching the filter, plus the total match count.
    #[instrument(skip(db))]
    pub async fn list_members(
        db: &PgPool,
        filter: &MemberFilterParams,
    ) -> Result<(Vec<Member>, i64), AppError> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members
             WHERE ($1::text IS NULL OR state = $1)
               AND ($2::text IS NULL OR city = $2)
               AND ($3::text IS NULL OR nation = $3)
             ORDER BY name ASC
             LIMIT $4 OFFSET $5"
        ))
        .bind(&filter.state)
        .bind(&filter.city)
        .bind(&filter.nation)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(db)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT count(*) FROM members
             WHERE ($1::text IS NULL OR state = $1)
               AND ($2::text IS NULL OR city = $2)
               AND ($3::text IS NULL OR nation = $3)",
        )
        .bind(&filter.state)
        .bind(&filter.city)
        .bind(&filter.nation)
        .fetch_one(db)
        .await?;

        Ok((members, total))
    }

    /// Member counts grouped by state. Members with no recorded state land
    /// in a null bucket the frontend labels "Unknown".
    pub async fn states_rollup(db: &PgPool) -> Result<Vec<StateSummary>, AppError> {
        let summaries = sqlx::query_as::<_, StateSummary>(
            "SELECT state, count(*) AS members
             FROM members
             GROUP BY state
             ORDER BY state ASC",
        )
        .fetch_all(db)
        .await?;

        Ok(summaries)
    }
}
