//! Command Handlers
//!
//! One thin handler per CLI operation: build the signed request, perform
//! the single call, pretty-print the response body to stdout. Errors
//! propagate to `main`, which maps them to a non-zero exit.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use crate::api::client::ExchangeClient;
use crate::api::types::{OrderRequest, OrderSide};
use crate::cli::Command;

/// Execute the parsed command against the exchange.
pub async fn dispatch(client: &ExchangeClient, command: Command) -> Result<()> {
    match command {
        Command::Accounts => accounts(client).await,
        Command::Order { order_id } => order(client, &order_id).await,
        Command::Buy { product_id, size } => {
            place_order(client, OrderSide::Buy, product_id, size).await
        }
        Command::Sell { product_id, size } => {
            place_order(client, OrderSide::Sell, product_id, size).await
        }
    }
}

/// GET /accounts — list trading accounts.
async fn accounts(client: &ExchangeClient) -> Result<()> {
    let response = client
        .get("/accounts")
        .await
        .context("Failed to fetch accounts")?;
    print_json(&response)
}

/// GET /orders/{id} — fetch a single order.
async fn order(client: &ExchangeClient, order_id: &str) -> Result<()> {
    let path = format!("/orders/{order_id}");
    let response = client
        .get(&path)
        .await
        .with_context(|| format!("Failed to fetch order {order_id}"))?;
    print_json(&response)
}

/// POST /orders — place a market order.
///
/// The body is serialized exactly once; the same string is signed and
/// transmitted.
async fn place_order(
    client: &ExchangeClient,
    side: OrderSide,
    product_id: String,
    size: String,
) -> Result<()> {
    validate_size(&size)?;

    let request = OrderRequest::market(side, product_id, size);
    let body = serde_json::to_string(&request)?;

    let response = client
        .post("/orders", &body)
        .await
        .with_context(|| format!("Failed to place {side} order"))?;

    info!(
        side = %side,
        product = %request.product_id,
        size = %request.size,
        "Order placed"
    );
    print_json(&response)
}

/// Reject sizes that are not positive decimals before any network call.
///
/// The validated string is still transmitted verbatim — parsing is a
/// check, not a normalization.
fn validate_size(size: &str) -> Result<()> {
    let parsed: Decimal = size
        .parse()
        .with_context(|| format!("Order size {size:?} is not a decimal number"))?;
    anyhow::ensure!(parsed > Decimal::ZERO, "Order size must be positive, got {size}");
    Ok(())
}

/// Pretty-print a JSON response body to stdout.
fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_fractional_size() {
        assert!(validate_size("0.001").is_ok());
    }

    #[test]
    fn accepts_size_with_trailing_zeros() {
        assert!(validate_size("1.500").is_ok());
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(validate_size("lots").is_err());
    }

    #[test]
    fn rejects_zero_size() {
        assert!(validate_size("0").is_err());
    }

    #[test]
    fn rejects_negative_size() {
        assert!(validate_size("-0.5").is_err());
    }
}
