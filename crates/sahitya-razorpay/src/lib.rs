//! Razorpay integration for the Sahitya backend.
//!
//! Covers the two server-side halves of the checkout flow:
//!
//! - [`RazorpayClient::create_order`] registers an order with the gateway
//!   (amounts are converted to paise here) and hands the gateway's order
//!   object back untouched, so a frontend can feed it straight into checkout.
//! - [`signature::verify_payment_signature`] checks the signature Razorpay
//!   attaches after a payment, in constant time.
//!
//! Configuration liveness checks live on [`RazorpayConfig`] so callers can
//! reject misconfigured deployments before any request leaves the process.

pub mod client;
pub mod config;
pub mod error;
pub mod signature;

pub use client::{OrderPayload, RazorpayClient, build_order_payload, DEFAULT_BASE_URL, DEFAULT_CURRENCY};
pub use config::{RazorpayConfig, LIVE_KEY_PREFIX, PLACEHOLDER_KEY_ID};
pub use error::RazorpayError;
pub use signature::{payment_signature, verify_payment_signature};
