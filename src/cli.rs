//! Command-line Interface Definitions
//!
//! clap-derive argument structs for the four supported operations.
//! Parsing failures print usage to stderr; the exit-code mapping lives
//! in `main`.

use clap::{Parser, Subcommand};

/// Command-line client for the Coinbase Exchange REST API.
#[derive(Debug, Parser)]
#[command(name = "coinbase-exchange-cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// The supported exchange operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all trading accounts for the authenticated profile.
    Accounts,

    /// Fetch a single order by ID.
    #[command(after_help = "Example: coinbase-exchange-cli order 123abc-456def")]
    Order {
        /// Server-assigned order ID.
        order_id: String,
    },

    /// Place a market buy order.
    #[command(after_help = "Example: coinbase-exchange-cli buy BTC-USD 0.001")]
    Buy {
        /// Product to trade, e.g. BTC-USD.
        product_id: String,
        /// Quantity in base currency, e.g. 0.001.
        size: String,
    },

    /// Place a market sell order.
    #[command(after_help = "Example: coinbase-exchange-cli sell BTC-USD 0.001")]
    Sell {
        /// Product to trade, e.g. BTC-USD.
        product_id: String,
        /// Quantity in base currency, e.g. 0.001.
        size: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accounts() {
        let cli = Cli::try_parse_from(["cbx", "accounts"]).unwrap();
        assert!(matches!(cli.command, Command::Accounts));
    }

    #[test]
    fn parses_buy_with_product_and_size() {
        let cli = Cli::try_parse_from(["cbx", "buy", "BTC-USD", "0.001"]).unwrap();
        match cli.command {
            Command::Buy { product_id, size } => {
                assert_eq!(product_id, "BTC-USD");
                assert_eq!(size, "0.001");
            }
            other => panic!("expected buy, got {other:?}"),
        }
    }

    #[test]
    fn order_without_id_is_a_usage_error() {
        assert!(Cli::try_parse_from(["cbx", "order"]).is_err());
    }

    #[test]
    fn sell_without_size_is_a_usage_error() {
        assert!(Cli::try_parse_from(["cbx", "sell", "BTC-USD"]).is_err());
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        assert!(Cli::try_parse_from(["cbx", "withdraw"]).is_err());
    }
}
