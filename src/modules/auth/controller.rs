use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::instrument;
use utoipa::ToSchema;

use crate::config::session::{REFRESH_COOKIE, SESSION_COOKIE};
use crate::middleware::auth::CurrentUser;
use crate::middleware::session::session_cookie;
use crate::modules::users::model::User;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto};
use super::service::AuthService;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new member account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 400, description = "Bad request - validation error or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = AuthService::register_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Sign in and receive session cookies
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; session cookies set", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Bad request - validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto, jar))]
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let (user, access_token, refresh_token) =
        AuthService::login_user(&state.db, dto, &state.session_config).await?;

    let jar = jar
        .add(session_cookie(SESSION_COOKIE, &access_token))
        .add(session_cookie(REFRESH_COOKIE, &refresh_token));

    Ok((jar, Json(LoginResponse { user })))
}

/// Sign out, clearing session cookies
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out; session cookies cleared", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(jar))]
pub async fn logout_user(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar
        .remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
        .remove(Cookie::build((REFRESH_COOKIE, "")).path("/").build());

    (
        jar,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
}

/// Current signed-in user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile of the signed-in user", body = User),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("session_cookie" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<User>, AppError> {
    let user = AuthService::current_user(&state.db, user.id).await?;
    Ok(Json(user))
}
