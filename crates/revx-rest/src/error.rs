//! Error types for REST API operations

use revx_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Credentials could not be loaded
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Transport-level failure (connection, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response text
        body: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Base URL or endpoint did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl RestError {
    /// HTTP status code, if the exchange responded with one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a 4xx response
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// Check if this is a 5xx response
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_classification() {
        let err = RestError::Status {
            status: 404,
            body: r#"{"message":"Order not found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert!(err.to_string().contains("Order not found"));

        let err = RestError::Status {
            status: 503,
            body: String::new(),
        };
        assert!(err.is_server_error());
    }

    #[test]
    fn test_auth_error_wraps() {
        let err: RestError = AuthError::EnvVarNotSet("REVX_API_KEY".to_string()).into();
        assert!(matches!(err, RestError::Auth(_)));
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("REVX_API_KEY"));
    }
}
