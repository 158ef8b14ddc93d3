use std::future::Future;

use futures::future;
use tracing::debug;

use crate::error::TranslitError;

/// Upper bound on in-flight lookups. The upstream endpoint rate-limits
/// aggressively, so batches are worked through in chunks of this size.
pub const CONCURRENT_LOOKUPS: usize = 5;

/// Runs `lookup` over `words` with bounded parallelism.
///
/// Words are split into chunks of `limit`; lookups within a chunk run
/// concurrently, chunks run strictly in sequence, and the output keeps the
/// input order. A failed lookup contributes the input word unchanged.
pub async fn batch_with_limit<F, Fut>(words: &[String], limit: usize, lookup: F) -> Vec<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, TranslitError>>,
{
    let mut out = Vec::with_capacity(words.len());
    for chunk in words.chunks(limit.max(1)) {
        let results = future::join_all(chunk.iter().cloned().map(&lookup)).await;
        for (word, result) in chunk.iter().zip(results) {
            out.push(match result {
                Ok(transliterated) => transliterated,
                Err(err) => {
                    debug!(%err, %word, "lookup failed, keeping the input word");
                    word.clone()
                }
            });
        }
    }
    out
}
