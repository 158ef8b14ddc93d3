use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::config::session::{REFRESH_COOKIE, SESSION_COOKIE, SessionConfig};
use crate::middleware::auth::CurrentUser;
use crate::modules::auth::model::TokenKind;
use crate::state::AppState;
use crate::utils::jwt::{create_access_token, create_refresh_token, verify_token};

/// Path prefixes reachable without a session. Everything else on the browser
/// surface redirects to `/login`. `/api` is listed so API endpoints can
/// answer 401 as JSON instead of redirecting; the handlers that need a user
/// still demand one through the [`CurrentUser`] extractor.
const PUBLIC_PREFIXES: &[&str] = &[
    "/login",
    "/auth",
    "/states",
    "/events",
    "/gallery/images",
    "/gallery/videos",
    "/central-committee",
    "/about",
    "/api",
    "/metrics",
    "/swagger-ui",
    "/scalar",
    "/api-docs",
];

fn is_public_path(path: &str) -> bool {
    path == "/" || PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Builds a session cookie scoped to the whole site.
pub fn session_cookie(name: &str, value: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), value.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Resolves the cookies into an identity, refreshing the pair when only the
/// refresh token is still valid. Returns the identity plus freshly minted
/// (access, refresh) tokens to set on the response, if any.
fn resolve_identity(
    jar: &CookieJar,
    config: &SessionConfig,
) -> (Option<CurrentUser>, Option<(String, String)>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(claims) = verify_token(cookie.value(), config, TokenKind::Access) {
            if let Ok(id) = Uuid::parse_str(&claims.sub) {
                return (
                    Some(CurrentUser {
                        id,
                        email: claims.email,
                    }),
                    None,
                );
            }
        }
    }

    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        if let Ok(claims) = verify_token(cookie.value(), config, TokenKind::Refresh) {
            if let Ok(id) = Uuid::parse_str(&claims.sub) {
                let tokens = create_access_token(id, &claims.email, config)
                    .ok()
                    .zip(create_refresh_token(id, &claims.email, config).ok());
                return (
                    Some(CurrentUser {
                        id,
                        email: claims.email,
                    }),
                    tokens,
                );
            }
        }
    }

    (None, None)
}

/// Session middleware applied to the whole router.
///
/// Makes the signed-in user available to handlers as a request extension,
/// silently rotates the cookie pair when the access token has expired, and
/// sends anonymous visitors of protected pages to `/login`.
pub async fn session_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let (identity, fresh_tokens) = resolve_identity(&jar, &state.session_config);

    if identity.is_none() && !is_public_path(req.uri().path()) {
        return Redirect::temporary("/login").into_response();
    }

    if let Some(user) = identity {
        req.extensions_mut().insert(user);
    }

    let mut response = next.run(req).await;

    if let Some((access, refresh)) = fresh_tokens {
        let cookies = [
            session_cookie(SESSION_COOKIE, &access),
            session_cookie(REFRESH_COOKIE, &refresh),
        ];
        for cookie in cookies {
            if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_public() {
        assert!(is_public_path("/"));
    }

    #[test]
    fn listed_prefixes_are_public() {
        assert!(is_public_path("/login"));
        assert!(is_public_path("/events"));
        assert!(is_public_path("/events/3f3a"));
        assert!(is_public_path("/gallery/images"));
        assert!(is_public_path("/api/razorpay/order"));
        assert!(is_public_path("/swagger-ui/index.html"));
    }

    #[test]
    fn protected_pages_are_not_public() {
        assert!(!is_public_path("/members"));
        assert!(!is_public_path("/dashboard"));
        assert!(!is_public_path("/dashboard/anything"));
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie(SESSION_COOKIE, "token-value");
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }
}
