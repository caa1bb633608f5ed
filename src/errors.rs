use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorBody;

/// Failures the relay can report to a caller. Every variant renders as a
/// flat `{ "error": "..." }` body; upstream detail never leaves the server.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Client input ─────────────────────────────────────────────────────────
    #[error("messages array required")]
    BadRequest,

    // ── Server configuration ─────────────────────────────────────────────────
    #[error("GROQ_API_KEY not set on server")]
    MissingApiKey,

    // ── Upstream completion API ──────────────────────────────────────────────
    #[error("Upstream call failed: {0}")]
    Upstream(#[from] UpstreamError),
}

/// Everything that can go wrong talking to Groq. Collapsed into a single
/// generic 500 for callers; kept distinct here for the logs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("response from {url} was not valid JSON (status {status}): {source}")]
    InvalidBody {
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text a caller is allowed to see.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Upstream(_) => "Server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.public_message() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = AppError::BadRequest;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "messages array required");
    }

    #[test]
    fn test_missing_key_is_visible_to_caller() {
        let err = AppError::MissingApiKey;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "GROQ_API_KEY not set on server");
    }

    #[test]
    fn test_upstream_detail_is_hidden() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = AppError::from(UpstreamError::InvalidBody {
            url: "http://upstream.test".to_string(),
            status: 502,
            source,
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error");
        assert!(err.to_string().contains("status 502"));
    }
}
