//! Ed25519 private key loading
//!
//! Revolut X issues API keys against an Ed25519 public key that the user
//! registers; the matching private key lives in a PKCS#8 PEM file such as the
//! one produced by `openssl genpkey -algorithm ed25519`.

use std::fs;
use std::path::Path;

use ed25519_dalek::pkcs8::DecodePrivateKey;
use ed25519_dalek::SigningKey;
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Load an unencrypted PKCS#8 PEM Ed25519 private key from disk
///
/// # Errors
/// Returns [`AuthError::KeyLoad`] if the file cannot be read or does not
/// contain a valid Ed25519 private key.
pub fn load_signing_key(path: impl AsRef<Path>) -> AuthResult<SigningKey> {
    let path = path.as_ref();

    let pem = fs::read_to_string(path).map_err(|e| AuthError::KeyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let key = parse_signing_key(&pem).map_err(|e| AuthError::KeyLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!("Loaded Ed25519 private key from {}", path.display());
    Ok(key)
}

/// Parse an unencrypted PKCS#8 PEM Ed25519 private key
pub fn parse_signing_key(pem: &str) -> AuthResult<SigningKey> {
    SigningKey::from_pkcs8_pem(pem.trim()).map_err(|e| AuthError::InvalidKey(e.to_string()))
}
