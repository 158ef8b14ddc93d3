use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Words in Latin script to transliterate into Devanagari.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TransliterateRequest {
    pub words: Vec<String>,
}

/// Transliterated words, same order and length as the request. Words the
/// upstream service could not handle come back unchanged.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransliterateResponse {
    pub words: Vec<String>,
}
