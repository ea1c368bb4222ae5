//! Exchange configuration endpoints

use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::transport::HttpTransport;

/// Currency and pair configuration endpoints
pub struct ConfigurationEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> ConfigurationEndpoints<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get all available currencies
    #[instrument(skip(self))]
    pub fn get_currencies(&self) -> RestResult<Value> {
        self.transport.get("/configuration/currencies", &[])
    }

    /// Get all tradable currency pairs
    #[instrument(skip(self))]
    pub fn get_currency_pairs(&self) -> RestResult<Value> {
        self.transport.get("/exchange/pairs", &[])
    }
}
