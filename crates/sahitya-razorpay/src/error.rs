use thiserror::Error;

/// Errors surfaced by the Razorpay client.
#[derive(Debug, Error)]
pub enum RazorpayError {
    /// The deployment is missing or carrying placeholder credentials.
    #[error("{0}")]
    Config(String),

    /// The gateway answered with a non-success status. The decoded error
    /// body is kept so the HTTP layer can pass it along as `details`.
    #[error("payment gateway rejected the request (http {status})")]
    Gateway {
        status: u16,
        body: serde_json::Value,
    },

    /// The gateway could not be reached or returned an unreadable body.
    #[error("failed to reach the payment gateway")]
    Transport(#[from] reqwest::Error),
}
