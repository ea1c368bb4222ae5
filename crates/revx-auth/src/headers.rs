//! Authentication header set attached to every request

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Revx-API-Key";
/// Header carrying the millisecond timestamp
pub const TIMESTAMP_HEADER: &str = "X-Revx-Timestamp";
/// Header carrying the base64 Ed25519 signature
pub const SIGNATURE_HEADER: &str = "X-Revx-Signature";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Signed headers for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// Value of `X-Revx-API-Key`
    pub api_key: String,
    /// Value of `X-Revx-Timestamp`
    pub timestamp: String,
    /// Value of `X-Revx-Signature`
    pub signature: String,
}

impl AuthHeaders {
    /// All headers to send, including JSON content negotiation
    pub fn to_pairs(&self) -> [(&'static str, &str); 5] {
        [
            (API_KEY_HEADER, self.api_key.as_str()),
            (TIMESTAMP_HEADER, self.timestamp.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
            ("Content-Type", JSON_CONTENT_TYPE),
            ("Accept", JSON_CONTENT_TYPE),
        ]
    }
}
