//! Common test utilities and fixtures for integration tests
//!
//! Response bodies mirror the shapes returned by the live Revolut X API.

#![allow(dead_code)]

use httpmock::MockServer;
use revx_rest::{ClientConfig, Credentials, RevxRestClient};

/// Ed25519 key generated with `openssl genpkey -algorithm ed25519`
pub const TEST_PEM: &str = include_str!("../fixtures/test_ed25519.pem");

pub const TEST_API_KEY: &str = "revx_test_api_key";

/// Sample `GET /configuration/currencies` response
pub const CURRENCIES_RESPONSE: &str = r#"{
    "BTC": {"symbol": "BTC", "name": "Bitcoin", "scale": 8, "asset_type": "crypto", "status": "active"},
    "USD": {"symbol": "USD", "name": "US Dollar", "scale": 2, "asset_type": "fiat", "status": "active"}
}"#;

/// Sample `GET /exchange/pairs` response
pub const PAIRS_RESPONSE: &str = r#"{
    "BTC/USD": {
        "base": "BTC",
        "quote": "USD",
        "base_step": "0.0000001",
        "quote_step": "0.01",
        "min_order_size": "0.0000001",
        "max_order_size": "1000",
        "status": "active"
    }
}"#;

/// Sample `GET /account/balances` response
pub const BALANCES_RESPONSE: &str = r#"[
    {"currency": "BTC", "available": "1.25000000", "reserved": "0.10000000", "total": "1.35000000"},
    {"currency": "USD", "available": "5000.00", "reserved": "0", "total": "5000.00"}
]"#;

/// Sample `POST /orders` response
pub const PLACE_ORDER_RESPONSE: &str = r#"{
    "data": {
        "venue_order_id": "7a52e92e-8639-4fe1-abaa-68d3a2d5234b",
        "client_order_id": "984a4d8a-2a9b-4950-822f-2a40037f02bd",
        "state": "new"
    }
}"#;

pub fn credentials() -> Credentials {
    let key = revx_auth::parse_signing_key(TEST_PEM).expect("fixture key parses");
    Credentials::new(TEST_API_KEY, &key)
}

/// Client pointed at the mock server's `/api/1.0` root
pub fn client_for(server: &MockServer) -> RevxRestClient {
    let config = ClientConfig::new().with_base_url(server.url("/api/1.0"));
    RevxRestClient::with_config(credentials(), config).expect("client builds")
}
