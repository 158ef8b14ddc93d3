use sahitya_razorpay::{
    RazorpayClient, RazorpayError, build_order_payload, verify_payment_signature,
};
use serde_json::Value;
use tracing::instrument;

use crate::metrics::{track_order_created, track_payment_verified};
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{CreateOrderDto, VerifyPaymentDto};

fn map_gateway_error(err: RazorpayError) -> AppError {
    match err {
        RazorpayError::Config(message) => AppError::config(message),
        RazorpayError::Gateway { body, .. } => AppError::internal(anyhow::anyhow!(
            "Failed to create order with payment gateway"
        ))
        .with_details(body),
        RazorpayError::Transport(err) => {
            AppError::internal(anyhow::Error::new(err).context("Failed to reach payment gateway"))
        }
    }
}

pub struct PaymentsService;

impl PaymentsService {
    /// Creates a gateway order and returns its JSON verbatim, so the
    /// checkout widget sees exactly what Razorpay produced.
    ///
    /// Credentials are checked before the amount: a misconfigured
    /// deployment reports 500 even for requests that would also fail
    /// validation.
    #[instrument(skip_all)]
    pub async fn create_order(state: &AppState, dto: CreateOrderDto) -> Result<Value, AppError> {
        state
            .razorpay_config
            .ensure_live()
            .map_err(map_gateway_error)?;

        let amount = match dto.amount {
            Some(amount) if amount > 0 => amount,
            _ => return Err(AppError::bad_request(anyhow::anyhow!("Amount is required"))),
        };

        let payload = build_order_payload(amount, dto.currency, dto.receipt, dto.notes)
            .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Amount is too large")))?;
        let client = RazorpayClient::with_http(state.razorpay_config.clone(), state.http.clone());

        let order = client
            .create_order(&payload)
            .await
            .map_err(map_gateway_error)?;

        track_order_created(&payload.currency);

        Ok(order)
    }

    /// Checks the checkout callback signature. A mismatch is a result, not
    /// an error: the handler turns it into a 400 with `success: false`.
    #[instrument(skip_all)]
    pub fn verify_payment(state: &AppState, dto: &VerifyPaymentDto) -> Result<bool, AppError> {
        let secret = state
            .razorpay_config
            .ensure_secret()
            .map_err(map_gateway_error)?;

        let valid = verify_payment_signature(
            &dto.razorpay_order_id,
            &dto.razorpay_payment_id,
            &dto.razorpay_signature,
            secret,
        );

        track_payment_verified(valid);

        Ok(valid)
    }
}
