use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("transliteration request failed")]
    Transport(#[from] reqwest::Error),

    /// The service answered 200 but not in the documented
    /// `["SUCCESS", [[input, [candidates, …]]]]` shape.
    #[error("unexpected response shape from transliteration service")]
    UnexpectedResponse,
}
