//! Types for Revolut X REST API requests
//!
//! Responses are passed through as [`serde_json::Value`]; only request
//! payloads are modelled, so that what gets signed is exactly what the
//! caller asked for.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RestError, RestResult};

// ============================================================================
// Order Enums
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

// ============================================================================
// Order Configuration
// ============================================================================

/// Limit order parameters
///
/// Exactly one of `base_size` or `quote_size` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    /// Size in base currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_size: Option<Decimal>,
    /// Size in quote currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_size: Option<Decimal>,
    /// Limit price
    pub price: Decimal,
}

/// Market order parameters
///
/// Exactly one of `base_size` or `quote_size` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    /// Size in base currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_size: Option<Decimal>,
    /// Size in quote currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_size: Option<Decimal>,
}

/// Order configuration, serialized as `{"limit": {...}}` or `{"market": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderConfiguration {
    Limit(LimitOrder),
    Market(MarketOrder),
}

impl OrderConfiguration {
    /// Limit order sized in base currency
    pub fn limit_base(base_size: Decimal, price: Decimal) -> Self {
        Self::Limit(LimitOrder {
            base_size: Some(base_size),
            quote_size: None,
            price,
        })
    }

    /// Limit order sized in quote currency
    pub fn limit_quote(quote_size: Decimal, price: Decimal) -> Self {
        Self::Limit(LimitOrder {
            base_size: None,
            quote_size: Some(quote_size),
            price,
        })
    }

    /// Market order sized in base currency
    pub fn market_base(base_size: Decimal) -> Self {
        Self::Market(MarketOrder {
            base_size: Some(base_size),
            quote_size: None,
        })
    }

    /// Market order sized in quote currency
    pub fn market_quote(quote_size: Decimal) -> Self {
        Self::Market(MarketOrder {
            base_size: None,
            quote_size: Some(quote_size),
        })
    }

    fn sizes(&self) -> (Option<Decimal>, Option<Decimal>) {
        match self {
            Self::Limit(o) => (o.base_size, o.quote_size),
            Self::Market(o) => (o.base_size, o.quote_size),
        }
    }

    /// Check that exactly one size is given and all amounts are positive
    pub fn validate(&self) -> RestResult<()> {
        match self.sizes() {
            (Some(_), Some(_)) => {
                return Err(RestError::InvalidParameter(
                    "Only one of base_size or quote_size may be set".to_string(),
                ))
            }
            (None, None) => {
                return Err(RestError::InvalidParameter(
                    "One of base_size or quote_size is required".to_string(),
                ))
            }
            (Some(size), None) | (None, Some(size)) if size <= Decimal::ZERO => {
                return Err(RestError::InvalidParameter(format!(
                    "Order size must be positive, got {}",
                    size
                )))
            }
            _ => {}
        }

        if let Self::Limit(o) = self {
            if o.price <= Decimal::ZERO {
                return Err(RestError::InvalidParameter(format!(
                    "Limit price must be positive, got {}",
                    o.price
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Order Request
// ============================================================================

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Caller-chosen identifier; the exchange uses it for idempotency
    pub client_order_id: String,
    /// Trading pair (e.g. "BTC-USD")
    pub symbol: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Limit or market parameters
    pub order_configuration: OrderConfiguration,
}

impl OrderRequest {
    /// Create an order request
    pub fn new(
        client_order_id: impl Into<String>,
        symbol: impl Into<String>,
        side: OrderSide,
        order_configuration: OrderConfiguration,
    ) -> Self {
        Self {
            client_order_id: client_order_id.into(),
            symbol: symbol.into(),
            side,
            order_configuration,
        }
    }

    /// Limit order sized in base currency
    pub fn limit(
        client_order_id: impl Into<String>,
        symbol: impl Into<String>,
        side: OrderSide,
        base_size: Decimal,
        price: Decimal,
    ) -> Self {
        Self::new(
            client_order_id,
            symbol,
            side,
            OrderConfiguration::limit_base(base_size, price),
        )
    }

    /// Market order sized in base currency
    pub fn market(
        client_order_id: impl Into<String>,
        symbol: impl Into<String>,
        side: OrderSide,
        base_size: Decimal,
    ) -> Self {
        Self::new(
            client_order_id,
            symbol,
            side,
            OrderConfiguration::market_base(base_size),
        )
    }

    /// Validate the request before it is signed and sent
    pub fn validate(&self) -> RestResult<()> {
        if self.client_order_id.trim().is_empty() {
            return Err(RestError::InvalidParameter(
                "client_order_id must not be empty".to_string(),
            ));
        }
        if self.symbol.trim().is_empty() {
            return Err(RestError::InvalidParameter(
                "symbol must not be empty".to_string(),
            ));
        }
        self.order_configuration.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_side_wire_format() {
        assert_eq!(serde_json::to_value(OrderSide::Buy).unwrap(), json!("buy"));
        assert_eq!(serde_json::to_value(OrderSide::Sell).unwrap(), json!("sell"));
        assert_eq!(OrderSide::Sell.to_string(), "sell");
    }

    #[test]
    fn test_limit_configuration_shape() {
        let config = OrderConfiguration::limit_base(dec!(0.001), dec!(50000.50));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"limit": {"base_size": "0.001", "price": "50000.50"}})
        );
    }

    #[test]
    fn test_market_configuration_shape() {
        let config = OrderConfiguration::market_quote(dec!(25));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"market": {"quote_size": "25"}})
        );
    }

    #[test]
    fn test_order_request_round_trip_is_lossless() {
        let order = OrderRequest::new(
            "3f1c9a2e-8b4d-4c1e-9f00-1a2b3c4d5e6f",
            "BTC-USD",
            OrderSide::Buy,
            OrderConfiguration::limit_quote(dec!(100.10), dec!(61234.5600)),
        );

        let body = serde_json::to_string(&order).unwrap();
        let parsed: OrderRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, order);
        // Trailing zeros survive, so the re-serialized body signs identically
        assert_eq!(serde_json::to_string(&parsed).unwrap(), body);
    }

    #[test]
    fn test_parse_configuration_from_exchange_json() {
        let config: OrderConfiguration =
            serde_json::from_str(r#"{"market":{"base_size":"0.5"}}"#).unwrap();
        assert_eq!(config, OrderConfiguration::market_base(dec!(0.5)));
    }

    #[test]
    fn test_validate_rejects_both_sizes() {
        let config = OrderConfiguration::Limit(LimitOrder {
            base_size: Some(dec!(1)),
            quote_size: Some(dec!(1)),
            price: dec!(10),
        });
        assert!(matches!(config.validate(), Err(RestError::InvalidParameter(_))));
    }

    #[test]
    fn test_validate_rejects_missing_size() {
        let config = OrderConfiguration::Market(MarketOrder {
            base_size: None,
            quote_size: None,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        assert!(OrderConfiguration::market_base(dec!(0)).validate().is_err());
        assert!(OrderConfiguration::limit_base(dec!(1), dec!(-1)).validate().is_err());
        assert!(OrderConfiguration::limit_base(dec!(1), dec!(1)).validate().is_ok());
    }

    #[test]
    fn test_order_request_validation() {
        let order = OrderRequest::market("", "BTC-USD", OrderSide::Sell, dec!(1));
        assert!(order.validate().is_err());

        let order = OrderRequest::market("id-1", " ", OrderSide::Sell, dec!(1));
        assert!(order.validate().is_err());

        let order = OrderRequest::limit("id-1", "ETH-USD", OrderSide::Buy, dec!(2), dec!(3000));
        assert!(order.validate().is_ok());
    }
}
