use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::config::RazorpayConfig;
use crate::error::RazorpayError;

pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1";
pub const DEFAULT_CURRENCY: &str = "INR";

/// Order creation body as the gateway expects it: amount already in paise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderPayload {
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<HashMap<String, String>>,
}

/// Builds the gateway payload from a request in whole rupees.
///
/// Converts to paise, and fills in the defaults the flow has always used:
/// `INR` when no currency is given and a `rcpt_<unix-millis>` receipt when
/// the caller does not bring one. Returns `None` when the paise amount
/// would not fit in a `u64`; the amount is caller-supplied and must never
/// wrap on its way to the gateway.
pub fn build_order_payload(
    amount: u64,
    currency: Option<String>,
    receipt: Option<String>,
    notes: Option<HashMap<String, String>>,
) -> Option<OrderPayload> {
    Some(OrderPayload {
        amount: amount.checked_mul(100)?,
        currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        receipt: receipt.unwrap_or_else(default_receipt),
        notes,
    })
}

fn default_receipt() -> String {
    format!("rcpt_{}", chrono::Utc::now().timestamp_millis())
}

/// Thin client for the Razorpay REST API, authenticated with HTTP basic
/// auth as the gateway requires.
#[derive(Clone, Debug)]
pub struct RazorpayClient {
    config: RazorpayConfig,
    http: reqwest::Client,
    base_url: String,
}

impl RazorpayClient {
    pub fn new(config: RazorpayConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Builds a client around an existing connection pool.
    pub fn with_http(config: RazorpayConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different gateway host, for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Registers an order with the gateway and returns its order object
    /// verbatim. No retries: a failed attempt is reported straight back to
    /// the caller, who may simply try again.
    pub async fn create_order(&self, payload: &OrderPayload) -> Result<Value, RazorpayError> {
        let response = self
            .http
            .post(format!("{}/orders", self.base_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        warn!(status = status.as_u16(), "razorpay order creation rejected");
        Err(RazorpayError::Gateway {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rupees_to_paise() {
        let payload = build_order_payload(500, None, Some("rcpt_1".to_string()), None).unwrap();
        assert_eq!(payload.amount, 50_000);
    }

    #[test]
    fn rejects_amounts_that_overflow_paise() {
        let payload = build_order_payload(u64::MAX / 2, None, Some("rcpt_1".to_string()), None);
        assert!(payload.is_none());

        let limit = u64::MAX / 100;
        assert!(build_order_payload(limit, None, Some("rcpt_1".to_string()), None).is_some());
        assert!(build_order_payload(limit + 1, None, Some("rcpt_1".to_string()), None).is_none());
    }

    #[test]
    fn defaults_currency_to_inr() {
        let payload = build_order_payload(1, None, Some("rcpt_1".to_string()), None).unwrap();
        assert_eq!(payload.currency, DEFAULT_CURRENCY);

        let payload = build_order_payload(1, Some("USD".to_string()), None, None).unwrap();
        assert_eq!(payload.currency, "USD");
    }

    #[test]
    fn generates_timestamped_receipt_when_absent() {
        let before = chrono::Utc::now().timestamp_millis();
        let payload = build_order_payload(1, None, None, None).unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        let millis: i64 = payload
            .receipt
            .strip_prefix("rcpt_")
            .expect("receipt should carry the rcpt_ prefix")
            .parse()
            .expect("receipt suffix should be a unix-millis timestamp");
        assert!((before..=after).contains(&millis));
    }

    #[test]
    fn keeps_caller_receipt() {
        let payload =
            build_order_payload(1, None, Some("rcpt_membership_42".to_string()), None).unwrap();
        assert_eq!(payload.receipt, "rcpt_membership_42");
    }

    #[test]
    fn omits_notes_when_absent() {
        let payload = build_order_payload(1, None, Some("rcpt_1".to_string()), None).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("notes").is_none());

        let notes = HashMap::from([("plan".to_string(), "premium".to_string())]);
        let payload = build_order_payload(1, None, Some("rcpt_1".to_string()), Some(notes)).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["notes"]["plan"], "premium");
    }
}
