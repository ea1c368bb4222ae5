//! Ed25519 request signing for the Revolut X API
//!
//! Every Revolut X REST call carries three authentication headers: the API
//! key, a millisecond timestamp, and a base64 Ed25519 signature over
//! `{timestamp}{method}{path}{body}`.
//!
//! # Example
//!
//! ```no_run
//! use revx_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_pem_file("your_api_key", "private_key.pem")?;
//!
//!     let headers = creds.sign("GET", "/api/1.0/account/balances", "");
//!     for (name, value) in headers.to_pairs() {
//!         println!("{}: {}", name, value);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod headers;
mod key;

pub use credentials::{Credentials, API_KEY_ENV, PRIVATE_KEY_PATH_ENV};
pub use error::{AuthError, AuthResult};
pub use headers::{AuthHeaders, API_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use key::{load_signing_key, parse_signing_key};

pub use ed25519_dalek::{SigningKey, VerifyingKey};
