use std::fmt;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("no authentication details supplied")]
    MissingCredentials,

    #[error("authentication failed")]
    AuthFailed,

    #[error("API returned error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("too many requests, rate limited")]
    RateLimited,

    #[error("service unavailable, retry later")]
    ServiceUnavailable,

    #[error("workload identity token not found in environment variable {0}")]
    MissingWorkloadToken(String),
}

/// Error body returned by the platform services:
/// `{"errors": [{"code": ..., "message": ...}]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_joins_messages() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"errors":[{"code":"NOT_FOUND","message":"Repository not found"},{"message":"Key is invalid"}]}"#,
        )
        .unwrap();

        assert_eq!(envelope.errors.len(), 2);
        assert_eq!(envelope.errors[0].code, "NOT_FOUND");
        assert_eq!(
            envelope.message(),
            "Repository not found. Key is invalid"
        );
    }

    #[test]
    fn api_error_formatting() {
        let error = ClientError::Api {
            status: 400,
            message: "Bad Request".to_string(),
        };

        let error_str = error.to_string();
        assert!(error_str.contains("HTTP 400"));
        assert!(error_str.contains("Bad Request"));
    }
}
