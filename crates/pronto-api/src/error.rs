//! Error types for the Pronto API client.

use std::fmt;

/// Errors reported by the Pronto API itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure.
    Auth { message: String },
    /// Rate limit exceeded.
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String, id: String },
    /// API validation error.
    Validation {
        field: Option<String>,
        message: String,
    },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation { field, message } => match field {
                Some(f_name) => write!(f, "Validation error on {}: {}", f_name, message),
                None => write!(f, "Validation error: {}", message),
            },
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimit { .. } | ApiError::Network { .. })
    }
}

/// Top-level error type for the client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reported by the API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Transport-level error from the HTTP client.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to encode request query parameters.
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        // Connection-level failures map to the API taxonomy so callers can
        // treat them as retryable; everything else stays a transport error.
        if e.is_connect() || e.is_timeout() {
            Error::Api(ApiError::Network {
                message: e.to_string(),
            })
        } else {
            Error::Transport(e)
        }
    }
}

impl Error {
    /// Returns true if the operation may succeed when retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api(api) => api.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for Pronto API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_http() {
        let error = ApiError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error 503: Service Unavailable");
    }

    #[test]
    fn test_api_error_display_auth() {
        let error = ApiError::Auth {
            message: "Invalid API key".to_string(),
        };
        assert_eq!(error.to_string(), "Auth error: Invalid API key");
    }

    #[test]
    fn test_api_error_display_rate_limit_with_retry_after() {
        let error = ApiError::RateLimit {
            retry_after: Some(60),
        };
        assert_eq!(error.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_api_error_display_rate_limit_without_retry_after() {
        let error = ApiError::RateLimit { retry_after: None };
        assert_eq!(error.to_string(), "Rate limited");
    }

    #[test]
    fn test_api_error_display_not_found() {
        let error = ApiError::NotFound {
            resource: "search".to_string(),
            id: "xyz789".to_string(),
        };
        assert_eq!(error.to_string(), "search not found: xyz789");
    }

    #[test]
    fn test_api_error_display_validation_with_field() {
        let error = ApiError::Validation {
            field: Some("filename".to_string()),
            message: "Required".to_string(),
        };
        assert_eq!(error.to_string(), "Validation error on filename: Required");
    }

    #[test]
    fn test_api_error_is_retryable() {
        assert!(ApiError::RateLimit { retry_after: None }.is_retryable());
        assert!(ApiError::Network {
            message: "Connection reset".to_string()
        }
        .is_retryable());
        assert!(!ApiError::Auth {
            message: "Unauthorized".to_string()
        }
        .is_retryable());
        assert!(!ApiError::NotFound {
            resource: "search".to_string(),
            id: "123".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_error_wraps_api_error() {
        let error: Error = ApiError::RateLimit { retry_after: None }.into();
        assert!(error.is_retryable());
        assert!(error.to_string().starts_with("API error:"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(Error::Api(ApiError::Network {
            message: "timeout".to_string(),
        }));
        assert!(error.to_string().contains("timeout"));
    }

    #[test]
    fn test_json_error_is_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Json(json_err);
        assert!(!error.is_retryable());
    }
}
