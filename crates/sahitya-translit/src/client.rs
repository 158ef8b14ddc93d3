use serde_json::Value;

use crate::batch::{batch_with_limit, CONCURRENT_LOOKUPS};
use crate::error::TranslitError;

pub const DEFAULT_ENDPOINT: &str = "https://inputtools.google.com/request";

/// Input Tools scheme id for Latin-to-Devanagari transliteration.
pub const DEFAULT_TARGET: &str = "hi-t-i0-und";

/// Client for a word-at-a-time transliteration endpoint.
#[derive(Clone, Debug)]
pub struct Transliterator {
    http: reqwest::Client,
    endpoint: String,
    target: String,
}

impl Transliterator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http(endpoint, reqwest::Client::new())
    }

    /// Builds a client around an existing connection pool.
    pub fn with_http(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            target: DEFAULT_TARGET.to_string(),
        }
    }

    /// Overrides the transliteration scheme.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Transliterates a single word, taking the service's first candidate.
    pub async fn lookup(&self, word: &str) -> Result<String, TranslitError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("text", word), ("itc", self.target.as_str()), ("num", "1")])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        first_candidate(&response).ok_or(TranslitError::UnexpectedResponse)
    }

    /// Transliterates a whole batch with bounded fan-out; words whose lookup
    /// fails come back unchanged.
    pub async fn transliterate(&self, words: &[String]) -> Vec<String> {
        batch_with_limit(words, CONCURRENT_LOOKUPS, |word| async move {
            self.lookup(&word).await
        })
        .await
    }
}

/// Pulls the first candidate out of an Input Tools response:
/// `["SUCCESS", [[input, [candidate, …], …], …]]`.
fn first_candidate(value: &Value) -> Option<String> {
    if value.get(0)?.as_str()? != "SUCCESS" {
        return None;
    }
    value
        .get(1)?
        .get(0)?
        .get(1)?
        .get(0)?
        .as_str()
        .map(str::to_owned)
}
