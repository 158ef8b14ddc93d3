//! Admin gates for the API and browser surfaces.
//!
//! The role is read from the database on every admin request rather than
//! from token claims, so demoting an administrator takes effect on their
//! next request instead of at token expiry.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::CurrentUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn load_role(db: &PgPool, user_id: Uuid) -> Result<UserRole, AppError> {
    let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?;

    role.ok_or_else(|| AppError::unauthorized("Account no longer exists"))
}

/// Guards the `/api/admin` surface. Non-admins get a JSON 403, anonymous
/// callers a JSON 401.
pub async fn require_admin_api(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let user = match CurrentUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    match load_role(&state.db, user.id).await {
        Ok(UserRole::Admin) => {}
        Ok(_) => return AppError::forbidden("Administrator access required").into_response(),
        Err(err) => return err.into_response(),
    }

    let req = Request::from_parts(parts, body);
    next.run(req).await
}

/// Guards the admin dashboard page. Anonymous visitors go to `/login`,
/// signed-in non-admins back to the home page.
pub async fn require_admin_page(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();

    let user = match CurrentUser::from_request_parts(&mut parts, &state).await {
        Ok(user) => user,
        Err(_) => return Redirect::temporary("/login").into_response(),
    };

    match load_role(&state.db, user.id).await {
        Ok(UserRole::Admin) => {
            let req = Request::from_parts(parts, body);
            next.run(req).await
        }
        Ok(_) => Redirect::temporary("/").into_response(),
        Err(_) => Redirect::temporary("/login").into_response(),
    }
}
