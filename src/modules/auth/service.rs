use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::session::SessionConfig;
use crate::metrics::{track_user_created, track_user_login_failure, track_user_login_success};
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, create_refresh_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, RegisterRequestDto};

const USER_COLUMNS: &str = "id, email, role, plan, notifications, created_at, updated_at";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password)
             VALUES ($1, $2)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        track_user_created(user.role.as_str());

        Ok(user)
    }

    /// Checks the credentials and mints the session token pair.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        session_config: &SessionConfig,
    ) -> Result<(User, String, String), AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            #[sqlx(flatten)]
            user: User,
            password: String,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(&format!(
            "SELECT {USER_COLUMNS}, password FROM users WHERE email = $1"
        ))
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            track_user_login_failure("unknown_email");
            AppError::unauthorized("Invalid email or password")
        })?;

        let is_valid = verify_password(&dto.password, &row.password)?;

        if !is_valid {
            track_user_login_failure("wrong_password");
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let access_token = create_access_token(row.user.id, &row.user.email, session_config)?;
        let refresh_token = create_refresh_token(row.user.id, &row.user.email, session_config)?;

        track_user_login_success(row.user.role.as_str());

        Ok((row.user, access_token, refresh_token))
    }

    pub async fn current_user(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Account no longer exists"))
    }
}
