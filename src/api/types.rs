//! Wire Types for the Exchange Order Endpoint

use serde::Serialize;

/// Order side accepted by `POST /orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Market order payload for `POST /orders`.
///
/// Field order matters: the struct serializes in declaration order, and
/// the serialized string is signed and transmitted verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Always "market"; limit orders are not supported.
    #[serde(rename = "type")]
    pub order_type: &'static str,
    pub side: OrderSide,
    /// Product to trade, e.g. "BTC-USD".
    pub product_id: String,
    /// Base-currency quantity as a decimal string, passed through verbatim.
    pub size: String,
}

impl OrderRequest {
    /// Build a market order.
    pub fn market(side: OrderSide, product_id: String, size: String) -> Self {
        Self {
            order_type: "market",
            side,
            product_id,
            size,
        }
    }
}
