//! Trading endpoints for order management

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{RestError, RestResult};
use crate::transport::HttpTransport;
use crate::types::OrderRequest;

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    transport: &'a HttpTransport,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Place a new order
    ///
    /// The request is validated locally before it is signed. Resubmitting the
    /// same `client_order_id` is how callers make a retry idempotent.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, client_order_id = %order.client_order_id))]
    pub fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        order.validate()?;
        debug!("Placing {} order on {}", order.side, order.symbol);
        self.transport.post("/orders", order)
    }

    /// Get an order by its exchange-assigned ID
    #[instrument(skip(self))]
    pub fn get_order(&self, order_id: &str) -> RestResult<Value> {
        let endpoint = order_endpoint(order_id)?;
        self.transport.get(&endpoint, &[])
    }

    /// Cancel an order by its exchange-assigned ID
    ///
    /// The exchange answers with an empty body on success, which is returned
    /// as [`Value::Null`].
    #[instrument(skip(self))]
    pub fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        let endpoint = order_endpoint(order_id)?;
        debug!("Cancelling order {}", order_id);
        self.transport.delete(&endpoint)
    }
}

/// `/orders/{id}`, rejecting IDs that would change the path shape
///
/// Exchange order IDs are UUIDs, so only ASCII alphanumerics, `-` and `_`
/// are accepted. Anything else (dot segments, `\`, percent escapes) could be
/// normalized by the URL parser into a different endpoint.
fn order_endpoint(order_id: &str) -> RestResult<String> {
    let order_id = order_id.trim();
    if order_id.is_empty() {
        return Err(RestError::InvalidParameter("Empty order id".to_string()));
    }
    if !order_id
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(RestError::InvalidParameter(format!(
            "Order id contains reserved characters: {}",
            order_id
        )));
    }
    Ok(format!("/orders/{}", order_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_endpoint() {
        assert_eq!(
            order_endpoint("7a52e92e-8639-4fe1-abaa-68d3a2d5234b").unwrap(),
            "/orders/7a52e92e-8639-4fe1-abaa-68d3a2d5234b"
        );
    }

    #[test]
    fn test_order_endpoint_rejects_empty_and_reserved() {
        assert!(matches!(order_endpoint(""), Err(RestError::InvalidParameter(_))));
        assert!(matches!(order_endpoint("  "), Err(RestError::InvalidParameter(_))));
        assert!(order_endpoint("abc/../balances").is_err());
        assert!(order_endpoint("abc?x=1").is_err());
        assert!(order_endpoint("abc#frag").is_err());
    }

    #[test]
    fn test_order_endpoint_rejects_dot_segments_and_escapes() {
        let ids = [
            "..",
            ".",
            "%2e%2e",
            "a\\..\\..\\account\\balances",
            "ab cd",
            "caf\u{e9}",
        ];
        for id in ids {
            assert!(
                matches!(order_endpoint(id), Err(RestError::InvalidParameter(_))),
                "{:?} should be rejected",
                id
            );
        }
        assert!(order_endpoint("client_order-42").is_ok());
    }
}
