//! Error types for the flzios scraper
//!
//! Provides a comprehensive error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all flzios scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
///
/// Parse-time absence of data is deliberately NOT represented here: an
/// empty listing or an empty episode mapping is a valid result, so the
/// extractors return empty collections instead of erroring. Only relay
/// and input-validation failures surface as errors.
#[derive(Error, Debug)]
pub enum FlziosError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A relay answered with a non-success status code
    #[error("relay returned status {status} for {url}")]
    RelayStatus { status: u16, url: String },

    /// Every relay in the chain failed; carries the last error seen
    #[error("all relays failed, last error: {0}")]
    RelayExhausted(#[source] Box<FlziosError>),

    /// Failed to parse HTML content
    #[error("failed to parse HTML: {0}")]
    Parse(String),

    /// Invalid URL provided or harvested
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Search query was empty or whitespace only
    #[error("search query cannot be empty")]
    EmptyQuery,
}

impl Serialize for FlziosError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for flzios operations
pub type Result<T> = std::result::Result<T, FlziosError>;
