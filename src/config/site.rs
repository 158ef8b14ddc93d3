use std::env;

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Upstream the avatar proxy fetches from.
    pub avatar_source_url: String,
    /// Transliteration service endpoint.
    pub translit_endpoint: String,
    /// Seconds between notification poll rounds.
    pub notification_poll_secs: u64,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            avatar_source_url: env::var("AVATAR_SOURCE_URL")
                .unwrap_or_else(|_| "https://i.pravatar.cc/300".to_string()),
            translit_endpoint: env::var("TRANSLIT_API_URL")
                .unwrap_or_else(|_| sahitya_translit::DEFAULT_ENDPOINT.to_string()),
            notification_poll_secs: env::var("NOTIFICATION_POLL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        }
    }
}
