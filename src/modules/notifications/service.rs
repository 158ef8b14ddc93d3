use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

pub struct NotificationsService;

impl NotificationsService {
    /// All notifications for a user, oldest first.
    pub async fn list_for_user(db: &PgPool, user_id: Uuid) -> Result<Vec<String>, AppError> {
        sqlx::query_scalar::<_, Vec<String>>("SELECT notifications FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
    }

    /// Appends a message to a user's notification list.
    #[instrument(skip(db, message))]
    pub async fn push(
        db: &PgPool,
        user_id: Uuid,
        message: &str,
    ) -> Result<Vec<String>, AppError> {
        sqlx::query_scalar::<_, Vec<String>>(
            "UPDATE users
             SET notifications = array_append(notifications, $2), updated_at = now()
             WHERE id = $1
             RETURNING notifications",
        )
        .bind(user_id)
        .bind(message)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id))
        })
    }
}
