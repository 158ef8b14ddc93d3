use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::config::session::SESSION_COOKIE;
use crate::modules::auth::model::TokenKind;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// The signed-in user, resolved from the session cookie.
///
/// [`crate::middleware::session::session_guard`] stores this as a request
/// extension; the extractor falls back to reading the cookie itself so
/// handlers work even when mounted outside the guarded router.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| AppError::unauthorized("Not signed in"))?;

        let claims = verify_token(&token, &state.session_config, TokenKind::Access)?;
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized("Invalid user id in session token"))?;

        Ok(CurrentUser {
            id,
            email: claims.email,
        })
    }
}
