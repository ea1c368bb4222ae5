//! REST API client for the Revolut X cryptocurrency exchange
//!
//! A thin, blocking binding over the Revolut X REST API. Every call is
//! signed with an Ed25519 key and carries the `X-Revx-*` authentication
//! headers; responses come back as [`serde_json::Value`].
//!
//! # Features
//!
//! - **Configuration**: Currencies, currency pairs
//! - **Account**: Balances
//! - **Trading**: Place, query, and cancel orders
//!
//! # Authentication
//!
//! Requests are signed over `{timestamp}{method}{path}{body}` with the
//! private key matching the public key registered for the API key. See
//! [`revx_auth`] for the signing primitives.
//!
//! # Example
//!
//! ```no_run
//! use revx_rest::{OrderRequest, OrderSide, RevxRestClient};
//! use rust_decimal::Decimal;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RevxRestClient::new("private_key.pem", "your_api_key")?;
//!
//!     let currencies = client.get_currencies()?;
//!     println!("Currencies: {}", currencies);
//!
//!     let order = OrderRequest::limit(
//!         "3f1c9a2e-8b4d-4c1e-9f00-1a2b3c4d5e6f",
//!         "BTC-USD",
//!         OrderSide::Buy,
//!         Decimal::new(1, 3),
//!         Decimal::from(50000),
//!     );
//!     let placed = client.place_order(&order)?;
//!     println!("Placed: {}", placed);
//!
//!     Ok(())
//! }
//! ```
//!
//! There is no retry, rate limiting, or caching. Errors surface immediately
//! as [`RestError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

mod transport;

/// Production API root
pub const BASE_URL: &str = "https://revx.revolut.com/api/1.0";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("revx-rest/", env!("CARGO_PKG_VERSION"));

// Re-export main types
pub use client::{ClientConfig, RevxRestClient};
pub use error::{RestError, RestResult};
pub use revx_auth::{AuthError, AuthHeaders, Credentials};
pub use transport::SignedRequest;

pub use types::{LimitOrder, MarketOrder, OrderConfiguration, OrderRequest, OrderSide};

pub use reqwest::Method;
