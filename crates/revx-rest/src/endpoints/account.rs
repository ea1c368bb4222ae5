//! Private account endpoints

use serde_json::Value;
use tracing::instrument;

use crate::error::RestResult;
use crate::transport::HttpTransport;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Get balances for every currency on the account
    #[instrument(skip(self))]
    pub fn get_balances(&self) -> RestResult<Value> {
        self.transport.get("/account/balances", &[])
    }
}
