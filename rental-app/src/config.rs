//! Configuration loading from environment.

use std::env;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// MB WAY charge endpoint; charges are simulated when unset.
    pub mbway_endpoint: Option<String>,
    /// PayPal charge endpoint; charges are simulated when unset.
    pub paypal_endpoint: Option<String>,
    pub log_json: bool,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", port, e))?,
            None => 3000,
        };

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let log_json = var("LOG_FORMAT")
            .map(|f| f.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Ok(Self {
            port,
            database_url,
            mbway_endpoint: var("MBWAY_ENDPOINT"),
            paypal_endpoint: var("PAYPAL_ENDPOINT"),
            log_json,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}
