use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateOrderDto, VerifyPaymentDto, VerifyResponse};
use super::service::PaymentsService;

/// Create a Razorpay order
#[utoipa::path(
    post,
    path = "/api/razorpay/order",
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Gateway order object, verbatim", body = Value),
        (status = 400, description = "Amount missing or zero", body = ErrorResponse),
        (status = 500, description = "Credentials not configured or gateway failure", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument(skip(state, dto))]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> Result<Json<Value>, AppError> {
    let order = PaymentsService::create_order(&state, dto).await?;
    Ok(Json(order))
}

/// Verify a checkout callback signature
#[utoipa::path(
    post,
    path = "/api/razorpay/verify",
    request_body = VerifyPaymentDto,
    responses(
        (status = 200, description = "Signature is genuine", body = VerifyResponse),
        (status = 400, description = "Signature mismatch", body = VerifyResponse),
        (status = 500, description = "Credentials not configured", body = ErrorResponse)
    ),
    tag = "Payments"
)]
#[instrument(skip(state, dto))]
pub async fn verify_payment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<VerifyPaymentDto>,
) -> Result<(StatusCode, Json<VerifyResponse>), AppError> {
    let valid = PaymentsService::verify_payment(&state, &dto)?;

    if valid {
        Ok((
            StatusCode::OK,
            Json(VerifyResponse {
                success: true,
                message: "Payment verified successfully".to_string(),
            }),
        ))
    } else {
        Ok((
            StatusCode::BAD_REQUEST,
            Json(VerifyResponse {
                success: false,
                message: "Invalid payment signature".to_string(),
            }),
        ))
    }
}
