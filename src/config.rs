//! Exchange Configuration — Environment Loading and Validation
//!
//! All credentials come from environment variables (a `.env` file in the
//! working directory is honored before loading). The configuration is
//! built once at startup, validated, and passed explicitly into the
//! signer and client — nothing reads ambient global state afterwards.

use anyhow::{Context, Result};
use base64::Engine;

pub const ENV_API_KEY: &str = "COINBASE_API_KEY";
pub const ENV_API_SECRET: &str = "COINBASE_API_SECRET";
pub const ENV_API_PASSPHRASE: &str = "COINBASE_API_PASSPHRASE";
pub const ENV_API_URL: &str = "COINBASE_API_URL";

/// Immutable exchange credentials and endpoint.
///
/// The secret stays base64-encoded here; [`crate::api::auth::RequestSigner`]
/// decodes it once at construction.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// API key sent in the `cb-access-key` header.
    pub api_key: String,
    /// Base64-encoded API secret; the decoded bytes are the HMAC key.
    pub api_secret: String,
    /// Passphrase sent in the `cb-access-passphrase` header.
    pub passphrase: String,
    /// Origin for all requests, e.g. `https://api.exchange.coinbase.com`.
    pub base_url: String,
}

impl ExchangeConfig {
    /// Load and validate configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Collects every missing name before failing so the operator sees the
    /// full list in one run instead of one variable at a time. Empty values
    /// count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();

        let (api_key, api_secret, passphrase, base_url) = {
            let mut require = |name: &'static str| {
                lookup(name)
                    .filter(|value| !value.is_empty())
                    .unwrap_or_else(|| {
                        missing.push(name);
                        String::new()
                    })
            };

            (
                require(ENV_API_KEY),
                require(ENV_API_SECRET),
                require(ENV_API_PASSPHRASE),
                require(ENV_API_URL),
            )
        };

        anyhow::ensure!(
            missing.is_empty(),
            "Missing required environment variables: {}",
            missing.join(", ")
        );

        let config = Self {
            api_key,
            api_secret,
            passphrase,
            base_url,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate parameters that would otherwise fail mid-request.
    ///
    /// A malformed secret is fatal here, before any network activity.
    fn validate(&self) -> Result<()> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.api_secret)
            .with_context(|| format!("{ENV_API_SECRET} is not valid base64"))?;

        anyhow::ensure!(
            self.base_url.starts_with("http"),
            "{} must be an http(s) origin, got {:?}",
            ENV_API_URL,
            self.base_url
        );

        Ok(())
    }
}
