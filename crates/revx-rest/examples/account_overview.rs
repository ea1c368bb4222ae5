//! Example: Revolut X account overview
//!
//! Lists currencies, pairs and balances, then optionally places and cancels
//! a far-from-market limit order.
//!
//! Run with: cargo run -p revx-rest --example account_overview
//!
//! Requires REVX_API_KEY and REVX_PRIVATE_KEY_PATH. Set REVX_PLACE_TEST_ORDER=1
//! to exercise the trading endpoints.

use revx_rest::{OrderRequest, OrderSide, RevxRestClient};
use rust_decimal_macros::dec;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("revx_rest=info".parse()?))
        .init();

    println!("=== Revolut X REST API Example ===\n");

    let client = RevxRestClient::from_env()?;

    println!("--- Currencies ---");
    let currencies = client.get_currencies()?;
    if let Some(map) = currencies.as_object() {
        for (symbol, info) in map {
            println!("  {:<6} {}", symbol, info["name"].as_str().unwrap_or("?"));
        }
    }
    println!();

    println!("--- Pairs ---");
    let pairs = client.get_currency_pairs()?;
    if let Some(map) = pairs.as_object() {
        println!("  {} pairs available", map.len());
    }
    println!();

    println!("--- Balances ---");
    match client.get_balances() {
        Ok(balances) => {
            for balance in balances.as_array().into_iter().flatten() {
                println!(
                    "  {:<6} available={} total={}",
                    balance["currency"].as_str().unwrap_or("?"),
                    balance["available"].as_str().unwrap_or("0"),
                    balance["total"].as_str().unwrap_or("0"),
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    if env::var("REVX_PLACE_TEST_ORDER").is_ok() {
        println!("--- Trading ---");
        let client_order_id = format!("example-{}", revx_rest::Credentials::timestamp_millis());
        let order = OrderRequest::limit(
            client_order_id,
            "BTC-USD",
            OrderSide::Buy,
            dec!(0.0001),
            dec!(1000),
        );

        let placed = client.place_order(&order)?;
        println!("  Placed: {}", placed);

        if let Some(id) = placed["data"]["venue_order_id"].as_str() {
            println!("  Order:  {}", client.get_order(id)?);
            client.cancel_order(id)?;
            println!("  Cancelled {}", id);
        }
    }

    Ok(())
}
