use axum::{Json, extract::State};
use sahitya_translit::Transliterator;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{TransliterateRequest, TransliterateResponse};

/// Transliterate Latin-script words to Devanagari
#[utoipa::path(
    post,
    path = "/api/transliterate",
    request_body = TransliterateRequest,
    responses(
        (status = 200, description = "Transliterated words in request order", body = TransliterateResponse)
    ),
    tag = "Transliterate"
)]
#[instrument(skip(state, dto), fields(words = dto.words.len()))]
pub async fn transliterate(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TransliterateRequest>,
) -> Result<Json<TransliterateResponse>, AppError> {
    let client = Transliterator::with_http(
        state.site_config.translit_endpoint.clone(),
        state.http.clone(),
    );

    let words = client.transliterate(&dto.words).await;

    Ok(Json(TransliterateResponse { words }))
}
