use axum::{
    extract::State,
    http::{StatusCode, header},
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Profile picture proxy.
///
/// Fetches an image from the configured upstream and relays the bytes, so
/// the browser only ever talks to this origin. Upstream problems surface
/// as 502.
#[utoipa::path(
    get,
    path = "/api/avatar",
    responses(
        (status = 200, description = "JPEG image bytes", content_type = "image/jpeg"),
        (status = 502, description = "Upstream avatar service unavailable")
    ),
    tag = "Avatar"
)]
#[instrument(skip(state))]
pub async fn avatar(
    State(state): State<AppState>,
) -> Result<([(header::HeaderName, &'static str); 1], Vec<u8>), AppError> {
    let response = state
        .http
        .get(&state.site_config.avatar_source_url)
        .send()
        .await
        .map_err(|err| {
            AppError::new(
                StatusCode::BAD_GATEWAY,
                anyhow::Error::new(err).context("Failed to fetch avatar from upstream"),
            )
        })?;

    if !response.status().is_success() {
        return Err(AppError::new(
            StatusCode::BAD_GATEWAY,
            anyhow::anyhow!(
                "Avatar upstream answered with status {}",
                response.status().as_u16()
            ),
        ));
    }

    let bytes = response.bytes().await.map_err(|err| {
        AppError::new(
            StatusCode::BAD_GATEWAY,
            anyhow::Error::new(err).context("Failed to read avatar bytes"),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes.to_vec()))
}
