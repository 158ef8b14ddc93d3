//! Payment signature verification.
//!
//! After checkout Razorpay hands the browser a signature computed as
//! `HMAC-SHA256(order_id + "|" + payment_id, key_secret)`, hex encoded.
//! The backend recomputes it and compares in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn payment_mac(order_id: &str, payment_id: &str, secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac
}

/// Hex signature for an order/payment pair. What the gateway produces;
/// exposed so tests and tooling can mint valid signatures.
pub fn payment_signature(order_id: &str, payment_id: &str, secret: &str) -> String {
    hex::encode(payment_mac(order_id, payment_id, secret).finalize().into_bytes())
}

/// Returns whether `signature` matches the order/payment pair.
///
/// The comparison runs in constant time via [`Mac::verify_slice`]. Anything
/// that does not decode as hex counts as a mismatch.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    payment_mac(order_id, payment_id, secret)
        .verify_slice(&provided)
        .is_ok()
}
