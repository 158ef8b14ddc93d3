use std::env;

/// Cookie carrying the short-lived access token.
pub const SESSION_COOKIE: &str = "sahitya_session";

/// Cookie carrying the long-lived refresh token.
pub const REFRESH_COOKIE: &str = "sahitya_refresh";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            refresh_token_expiry: env::var("JWT_REFRESH_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
