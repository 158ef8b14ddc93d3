use crate::error::RazorpayError;

/// Value shipped in `.env.example`; treated the same as an unset key.
pub const PLACEHOLDER_KEY_ID: &str = "your_key_id_here";

/// Every real Razorpay key id, test or live mode, starts with this.
pub const LIVE_KEY_PREFIX: &str = "rzp_";

/// Gateway credentials as read from the environment.
///
/// The fields are plain strings on purpose: an empty string means "unset",
/// and [`RazorpayConfig::ensure_live`] is where that gets turned into an
/// error, per request, so a misconfigured deployment still boots and serves
/// everything except payments.
#[derive(Clone, Debug)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
}

impl RazorpayConfig {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Checks that both credentials look usable before any request is made.
    pub fn ensure_live(&self) -> Result<(), RazorpayError> {
        if self.key_id.is_empty()
            || self.key_id == PLACEHOLDER_KEY_ID
            || !self.key_id.starts_with(LIVE_KEY_PREFIX)
        {
            return Err(RazorpayError::Config(
                "Razorpay key id is not configured".to_string(),
            ));
        }
        if self.key_secret.is_empty() {
            return Err(RazorpayError::Config(
                "Razorpay key secret is not configured".to_string(),
            ));
        }
        Ok(())
    }

    /// The shared secret, or a config error when it is unset. Signature
    /// verification only needs the secret, not a well-formed key id.
    pub fn ensure_secret(&self) -> Result<&str, RazorpayError> {
        if self.key_secret.is_empty() {
            return Err(RazorpayError::Config(
                "Razorpay key secret is not configured".to_string(),
            ));
        }
        Ok(&self.key_secret)
    }
}
