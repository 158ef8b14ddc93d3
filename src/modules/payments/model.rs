use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Order creation request. Amount is in rupees; the gateway is paid in
/// paise, the service converts.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderDto {
    pub amount: Option<u64>,
    pub currency: Option<String>,
    pub receipt: Option<String>,
    #[serde(default)]
    pub notes: Option<HashMap<String, String>>,
}

/// The three values the Razorpay checkout hands back after payment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyPaymentDto {
    #[validate(length(min = 1))]
    pub razorpay_order_id: String,
    #[validate(length(min = 1))]
    pub razorpay_payment_id: String,
    #[validate(length(min = 1))]
    pub razorpay_signature: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
}
