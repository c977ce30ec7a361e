//! Unified lookup error types.

use crate::shared::Category;
use thiserror::Error;

/// Terminal outcome of a single failed lookup.
///
/// The `Display` text is what the page shows in the section's detail area.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("empty input: please enter a {} name", .category.noun())]
    EmptyInput { category: Category },

    #[error("no {} found", .category.noun())]
    NotFound { category: Category },

    #[error("network or API error: {0}")]
    Network(String),

    #[error("invalid or empty data ({})", .category.noun())]
    InvalidData { category: Category },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookupError {
    /// Classify an HTTP-layer failure for a lookup on `category`.
    pub fn from_http(err: HttpError, category: Category) -> Self {
        match err {
            HttpError::NotFound(_) => LookupError::NotFound { category },
            HttpError::Decode(_) => LookupError::InvalidData { category },
            HttpError::ServerError { status_text, .. } => LookupError::Network(status_text),
            HttpError::RateLimited { .. } => LookupError::Network("Too Many Requests".to_string()),
            other => LookupError::Network(other.to_string()),
        }
    }

    /// Whether the lookup never reached the network.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, LookupError::EmptyInput { .. })
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status} {status_text}: {body}")]
    ServerError {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_category() {
        let err = LookupError::from_http(HttpError::NotFound(String::new()), Category::Demon);
        assert_eq!(err.to_string(), "no demon found");
    }

    #[test]
    fn test_server_error_carries_status_text() {
        let err = LookupError::from_http(
            HttpError::ServerError {
                status: 503,
                status_text: "Service Unavailable".to_string(),
                body: String::new(),
            },
            Category::Character,
        );
        assert_eq!(err.to_string(), "network or API error: Service Unavailable");
    }

    #[test]
    fn test_decode_failure_is_invalid_data() {
        let decode = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = LookupError::from_http(HttpError::Decode(decode), Category::BreathingStyle);
        assert_eq!(err.to_string(), "invalid or empty data (breathing style)");
    }

    #[test]
    fn test_empty_input_never_hits_network() {
        let err = LookupError::EmptyInput {
            category: Category::Character,
        };
        assert!(err.is_empty_input());
        assert_eq!(err.to_string(), "empty input: please enter a character name");
    }
}
