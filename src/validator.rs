use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// JSON extractor that runs `validator` rules after deserialization.
///
/// Deserialization problems map to 400 with a short human message (missing
/// fields are reported by name); rule violations map to 422 with the joined
/// validation messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_rejection)?;

        value.validate().map_err(|errors| {
            AppError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                anyhow!("{}", join_messages(&errors)),
            )
        })?;

        Ok(ValidatedJson(value))
    }
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    // serde's message is the only place the offending field name appears.
    let detail = rejection.body_text();
    let message = if let Some(field) = missing_field_name(&detail) {
        anyhow!("{} is required", field)
    } else if detail.contains("invalid type") {
        anyhow!("Invalid field type in request")
    } else {
        anyhow!("Invalid request body")
    };

    AppError::bad_request(message)
}

fn missing_field_name(detail: &str) -> Option<&str> {
    let rest = detail.split("missing field `").nth(1)?;
    rest.split('`').next()
}

fn join_messages(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
