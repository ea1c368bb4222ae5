//! Main REST client implementation

use reqwest::Method;
use revx_auth::Credentials;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::endpoints::{AccountEndpoints, ConfigurationEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::transport::{HttpTransport, SignedRequest};
use crate::types::OrderRequest;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Revolut X REST API client
///
/// Every endpoint is private, so the client always holds credentials.
///
/// # Example
///
/// ```no_run
/// use revx_rest::RevxRestClient;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RevxRestClient::new("private_key.pem", "your_api_key")?;
///     let balances = client.get_balances()?;
///     println!("{}", balances);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct RevxRestClient {
    transport: HttpTransport,
}

impl RevxRestClient {
    /// Create a client from a PEM private key file and an API key
    ///
    /// # Errors
    /// Returns [`RestError::Auth`](crate::RestError::Auth) if the key cannot be loaded.
    pub fn new(private_key_path: impl AsRef<Path>, api_key: impl Into<String>) -> RestResult<Self> {
        let credentials = Credentials::from_pem_file(api_key, private_key_path)?;
        Self::with_credentials(credentials)
    }

    /// Create a client from `REVX_API_KEY` and `REVX_PRIVATE_KEY_PATH`
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Create a client with already-loaded credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let transport = HttpTransport::new(credentials, &config)?;

        info!("Created Revolut X REST client for {}", transport.base_url());

        Ok(Self { transport })
    }

    /// API key in use
    pub fn api_key(&self) -> &str {
        self.transport.credentials().api_key()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    // ========================================================================
    // Generic access
    // ========================================================================

    /// Build and sign a request without sending it
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Path below the base URL (e.g. "/orders")
    /// * `params` - Query parameters
    /// * `body` - JSON body
    pub fn sign_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> RestResult<SignedRequest> {
        self.transport.prepare(method, endpoint, params, body)
    }

    /// Issue a signed request to any endpoint and deserialize the response
    pub fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> RestResult<T> {
        self.transport.request(method, endpoint, params, body)
    }

    // ========================================================================
    // Configuration Endpoints
    // ========================================================================

    /// Get configuration endpoints
    pub fn configuration(&self) -> ConfigurationEndpoints<'_> {
        ConfigurationEndpoints::new(&self.transport)
    }

    /// Get all available currencies
    pub fn get_currencies(&self) -> RestResult<Value> {
        self.configuration().get_currencies()
    }

    /// Get all tradable currency pairs
    pub fn get_currency_pairs(&self) -> RestResult<Value> {
        self.configuration().get_currency_pairs()
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.transport)
    }

    /// Get all balances
    pub fn get_balances(&self) -> RestResult<Value> {
        self.account().get_balances()
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.transport)
    }

    /// Place a new order
    pub fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading().place_order(order)
    }

    /// Get an order by ID
    pub fn get_order(&self, order_id: &str) -> RestResult<Value> {
        self.trading().get_order(order_id)
    }

    /// Cancel an order by ID
    pub fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        self.trading().cancel_order(order_id)
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, including the `/api/1.0` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: crate::BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RestError;
    use revx_auth::{parse_signing_key, AuthError};

    const TEST_PEM: &str = include_str!("../tests/fixtures/test_ed25519.pem");

    fn credentials() -> Credentials {
        Credentials::new("test_key", &parse_signing_key(TEST_PEM).unwrap())
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(60)
            .with_user_agent("test-agent")
            .with_base_url("http://localhost:8080/api/1.0");

        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert_eq!(config.base_url, "http://localhost:8080/api/1.0");
    }

    #[test]
    fn test_default_config_targets_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://revx.revolut.com/api/1.0");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_with_credentials() {
        let client = RevxRestClient::with_credentials(credentials()).unwrap();
        assert_eq!(client.api_key(), "test_key");
        assert_eq!(client.base_url(), crate::BASE_URL);
    }

    #[test]
    fn test_missing_key_file_is_construction_error() {
        let result = RevxRestClient::new("/no/such/key.pem", "test_key");
        assert!(matches!(
            result,
            Err(RestError::Auth(AuthError::KeyLoad { .. }))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let client = RevxRestClient::with_credentials(credentials()).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RevxRestClient>();
    }
}
