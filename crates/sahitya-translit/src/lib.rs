//! Latin-to-Devanagari transliteration for the Sahitya backend.
//!
//! Wraps a Google Input Tools style endpoint that transliterates one word
//! per request. [`batch_with_limit`] keeps request fan-out bounded: words are
//! processed in fixed-size chunks, chunks strictly one after another, and a
//! word whose lookup fails falls back to itself so a flaky upstream can never
//! fail a whole batch.

pub mod batch;
pub mod client;
pub mod error;

pub use batch::{batch_with_limit, CONCURRENT_LOOKUPS};
pub use client::{Transliterator, DEFAULT_ENDPOINT, DEFAULT_TARGET};
pub use error::TranslitError;
