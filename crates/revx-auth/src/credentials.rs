//! Authentication credentials for the Revolut X API
//!
//! Implements Ed25519 request signing as required by every Revolut X
//! endpoint.
//!
//! # Security
//!
//! The private key seed is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use secrecy::{ExposeSecret, SecretBox};

use crate::error::{AuthError, AuthResult};
use crate::headers::AuthHeaders;
use crate::key::load_signing_key;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "REVX_API_KEY";
/// Environment variable holding the path to the PEM private key
pub const PRIVATE_KEY_PATH_ENV: &str = "REVX_PRIVATE_KEY_PATH";

/// API credentials for authenticated requests
///
/// The key is set once at construction and never mutated. Its seed is
/// zeroized when the Credentials are dropped.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Ed25519 seed (zeroized on drop)
    private_key: SecretBox<[u8; 32]>,
}

impl Credentials {
    /// Create credentials from an API key and an already-parsed signing key
    pub fn new(api_key: impl Into<String>, signing_key: &SigningKey) -> Self {
        Self {
            api_key: api_key.into(),
            private_key: SecretBox::new(Box::new(signing_key.to_bytes())),
        }
    }

    /// Create credentials from an API key and a PEM private key file
    ///
    /// # Errors
    /// Returns [`AuthError::KeyLoad`] if the key file is unreadable or malformed.
    pub fn from_pem_file(api_key: impl Into<String>, path: impl AsRef<Path>) -> AuthResult<Self> {
        let signing_key = load_signing_key(path)?;
        Ok(Self::new(api_key, &signing_key))
    }

    /// Create credentials from environment variables
    ///
    /// Reads `REVX_API_KEY` and `REVX_PRIVATE_KEY_PATH` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let key_path = std::env::var(PRIVATE_KEY_PATH_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(PRIVATE_KEY_PATH_ENV.to_string()))?;

        Self::from_pem_file(api_key, key_path)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Public half of the signing key, as registered with the exchange
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key().verifying_key()
    }

    // Only the 32-byte seed lives in the SecretBox; the expanded key is
    // rebuilt per signature and dropped (and zeroized) right after.
    fn signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(self.private_key.expose_secret())
    }

    /// Current Unix time in milliseconds, as sent in `X-Revx-Timestamp`
    pub fn timestamp_millis() -> String {
        Utc::now().timestamp_millis().to_string()
    }

    /// Build the canonical string that gets signed
    ///
    /// `{timestamp}{method}{path}{body}` with no separators. `path` includes
    /// the `/api/1.0` prefix and any query string; `body` is empty when the
    /// request carries none.
    pub fn signing_message(timestamp: &str, method: &str, path: &str, body: &str) -> String {
        let mut message =
            String::with_capacity(timestamp.len() + method.len() + path.len() + body.len());
        message.push_str(timestamp);
        message.push_str(method);
        message.push_str(path);
        message.push_str(body);
        message
    }

    /// Sign a canonical message, returning the base64-encoded signature
    pub fn sign_message(&self, message: &str) -> String {
        let signature = self.signing_key().sign(message.as_bytes());
        BASE64.encode(signature.to_bytes())
    }

    /// Sign a request at an explicit timestamp
    ///
    /// Pure function of its inputs and the key: Ed25519 signatures are
    /// deterministic, so identical arguments yield identical headers.
    pub fn sign_at(&self, timestamp: &str, method: &str, path: &str, body: &str) -> AuthHeaders {
        let message = Self::signing_message(timestamp, method, path, body);
        AuthHeaders {
            api_key: self.api_key.clone(),
            timestamp: timestamp.to_string(),
            signature: self.sign_message(&message),
        }
    }

    /// Sign a request using the current millisecond timestamp
    ///
    /// # Arguments
    /// * `method` - Uppercase HTTP method (e.g. "GET")
    /// * `path` - Request path including prefix and query (e.g. "/api/1.0/orders")
    /// * `body` - Exact JSON body being sent, or "" for none
    pub fn sign(&self, method: &str, path: &str, body: &str) -> AuthHeaders {
        self.sign_at(&Self::timestamp_millis(), method, path, body)
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            private_key: SecretBox::new(Box::new(*self.private_key.expose_secret())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible = self
            .api_key
            .char_indices()
            .nth(8)
            .map_or(self.api_key.as_str(), |(i, _)| &self.api_key[..i]);

        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", visible))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
