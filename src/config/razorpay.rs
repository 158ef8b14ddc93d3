use std::env;

use sahitya_razorpay::RazorpayConfig;

/// Loads the Razorpay credentials from `RAZORPAY_KEY_ID` and
/// `RAZORPAY_KEY_SECRET`.
///
/// Missing variables resolve to empty strings rather than a startup panic:
/// the service boots without payment credentials and the payment endpoints
/// report the problem per request. See [`RazorpayConfig::ensure_live`].
pub fn from_env() -> RazorpayConfig {
    RazorpayConfig::new(
        env::var("RAZORPAY_KEY_ID").unwrap_or_default(),
        env::var("RAZORPAY_KEY_SECRET").unwrap_or_default(),
    )
}
