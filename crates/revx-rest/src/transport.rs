//! Signed HTTP transport shared by all endpoint groups

use reqwest::blocking::Client;
use reqwest::{Method, Url};
use revx_auth::{AuthHeaders, Credentials};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::client::ClientConfig;
use crate::error::{RestError, RestResult};

/// A request that has been built and signed but not yet sent
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL, including any query string
    pub url: Url,
    /// Path that was signed: URL path plus `?query` when present
    pub path: String,
    /// Exact JSON body that was signed, if any
    pub body: Option<String>,
    /// Authentication headers
    pub headers: AuthHeaders,
}

/// Owns the HTTP client, credentials and base URL
pub(crate) struct HttpTransport {
    http: Client,
    credentials: Credentials,
    base_url: String,
}

impl HttpTransport {
    pub(crate) fn new(credentials: Credentials, config: &ClientConfig) -> RestResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or(crate::DEFAULT_USER_AGENT))
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| RestError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            http,
            credentials,
            base_url,
        })
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an endpoint and query parameters into a URL
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> RestResult<Url> {
        let raw = format!("{}{}", self.base_url, endpoint);
        let mut url = Url::parse(&raw).map_err(|e| RestError::InvalidUrl(format!("{}: {}", raw, e)))?;

        if !params.is_empty() {
            let query = serde_urlencoded::to_string(params)
                .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Build and sign a request without sending it
    pub(crate) fn prepare<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> RestResult<SignedRequest> {
        let url = self.build_url(endpoint, params)?;

        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

        let headers = self.credentials.sign(
            method.as_str(),
            &path,
            body.as_deref().unwrap_or_default(),
        );

        Ok(SignedRequest {
            method,
            url,
            path,
            body,
            headers,
        })
    }

    /// Send a signed request and parse the JSON response
    pub(crate) fn execute<T: DeserializeOwned>(&self, request: SignedRequest) -> RestResult<T> {
        debug!("Making authenticated {} request to {}", request.method, request.path);

        let mut builder = self.http.request(request.method.clone(), request.url);
        for (name, value) in request.headers.to_pairs() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            error!(
                status = status.as_u16(),
                body = %text,
                "{} {} failed",
                request.method,
                request.path
            );
            return Err(RestError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        // 204 No Content and friends
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };

        serde_json::from_str(text).map_err(|e| RestError::Parse(e.to_string()))
    }

    /// Sign, send, and parse in one step
    pub(crate) fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
        body: Option<&B>,
    ) -> RestResult<T> {
        let request = self.prepare(method, endpoint, params, body)?;
        self.execute(request)
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> RestResult<T> {
        self.request(Method::GET, endpoint, params, None::<&()>)
    }

    pub(crate) fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> RestResult<T> {
        self.request(Method::POST, endpoint, &[], Some(body))
    }

    pub(crate) fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> RestResult<T> {
        self.request(Method::DELETE, endpoint, &[], None::<&()>)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
