use sahitya_razorpay::RazorpayConfig;
use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::rate_limit::RateLimitConfig;
use crate::config::razorpay;
use crate::config::session::SessionConfig;
use crate::config::site::SiteConfig;

/// Shared application state, cloned into every handler.
///
/// Outbound HTTP (Razorpay, transliteration, the avatar proxy) shares one
/// `reqwest::Client` so connection pools are reused across requests.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub http: reqwest::Client,
    pub session_config: SessionConfig,
    pub razorpay_config: RazorpayConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub site_config: SiteConfig,
}

/// Builds the application state from the environment.
///
/// Panics if the database is unreachable; everything else falls back to
/// defaults or defers errors to the endpoints that need the values.
pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        http: reqwest::Client::new(),
        session_config: SessionConfig::from_env(),
        razorpay_config: razorpay::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        site_config: SiteConfig::from_env(),
    }
}
