use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

/// Rate limit configuration for the API.
///
/// Auth and payment endpoints get their own budgets; everything else is
/// left unthrottled. Keys are derived from `x-forwarded-for` / `x-real-ip`
/// (falling back to the peer address) so limits hold behind a proxy.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    /// Requests per second for auth endpoints
    pub auth_per_second: u64,
    /// Burst size for auth endpoints
    pub auth_burst_size: u32,
    /// Requests per second for payment endpoints
    pub payment_per_second: u64,
    /// Burst size for payment endpoints
    pub payment_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            auth_per_second: 10,
            auth_burst_size: 5,
            payment_per_second: 5,
            payment_burst_size: 10,
        }
    }
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self {
            auth_per_second: std::env::var("RATE_LIMIT_AUTH_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            auth_burst_size: std::env::var("RATE_LIMIT_AUTH_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            payment_per_second: std::env::var("RATE_LIMIT_PAYMENT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            payment_burst_size: std::env::var("RATE_LIMIT_PAYMENT_BURST_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Create GovernorConfig for auth endpoints
    pub fn auth_governor_config(
        &self,
    ) -> GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        GovernorConfigBuilder::default()
            .per_second(self.auth_per_second)
            .burst_size(self.auth_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Failed to build auth rate limiter config")
    }

    /// Create GovernorConfig for payment endpoints
    pub fn payment_governor_config(
        &self,
    ) -> GovernorConfig<SmartIpKeyExtractor, ::governor::middleware::NoOpMiddleware> {
        GovernorConfigBuilder::default()
            .per_second(self.payment_per_second)
            .burst_size(self.payment_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("Failed to build payment rate limiter config")
    }
}
