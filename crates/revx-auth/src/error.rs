//! Error types for authentication operations

use std::path::PathBuf;

/// Errors that can occur while loading keys or building credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Private key file could not be read or parsed
    #[error("Failed to load private key from {}: {reason}", .path.display())]
    KeyLoad {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Key material was readable but not a valid Ed25519 private key
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("REVX_API_KEY".to_string());
        assert!(err.to_string().contains("REVX_API_KEY"));
    }

    #[test]
    fn test_key_load_display_includes_path() {
        let err = AuthError::KeyLoad {
            path: PathBuf::from("/keys/missing.pem"),
            reason: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/keys/missing.pem"));
        assert!(msg.contains("No such file"));
    }
}
