//! Configuration Module
//!
//! Handles loading the Pokedex settings from environment variables, with
//! command-line flags layered on top.

use std::env;
use std::time::Duration;

use crate::api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::cache::{CacheConfig, DEFAULT_CACHE_INTERVAL_SECS};
use crate::error::{PokedexError, Result};

/// Runtime settings.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seconds a cached response is kept before it may be reaped
    pub cache_ttl: u64,
    /// Seconds between reaper runs; defaults to `cache_ttl`
    pub reap_interval: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
    /// PokeAPI root URL
    pub base_url: String,
}

/// Command-line overrides. `None` keeps the environment/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cache_ttl: Option<u64>,
    pub reap_interval: Option<u64>,
    pub http_timeout: Option<u64>,
    pub base_url: Option<String>,
}

fn env_parse(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_REAP_INTERVAL` - Reaper period in seconds (default: the TTL)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        let cache_ttl = env_parse("POKEDEX_CACHE_TTL").unwrap_or(DEFAULT_CACHE_INTERVAL_SECS);

        Self {
            cache_ttl,
            reap_interval: env_parse("POKEDEX_REAP_INTERVAL").unwrap_or(cache_ttl),
            http_timeout: env_parse("POKEDEX_HTTP_TIMEOUT").unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Applies command-line overrides.
    ///
    /// Overriding only the TTL also moves the reap interval, unless the
    /// interval was set on its own.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(ttl) = overrides.cache_ttl {
            if self.reap_interval == self.cache_ttl {
                self.reap_interval = ttl;
            }
            self.cache_ttl = ttl;
        }
        if let Some(interval) = overrides.reap_interval {
            self.reap_interval = interval;
        }
        if let Some(timeout) = overrides.http_timeout {
            self.http_timeout = timeout;
        }
        if let Some(url) = overrides.base_url {
            self.base_url = url;
        }
        self
    }

    // == Validate ==
    /// Rejects zero or oversized durations and non-HTTP base URLs.
    pub fn validate(&self) -> Result<()> {
        self.cache_config().validate()?;

        if self.http_timeout == 0 {
            return Err(PokedexError::InvalidConfig(
                "HTTP timeout must be greater than zero".to_string(),
            ));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(PokedexError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(self.cache_ttl),
            reap_interval: Duration::from_secs(self.reap_interval),
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.http_timeout),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_INTERVAL_SECS,
            reap_interval: DEFAULT_CACHE_INTERVAL_SECS,
            http_timeout: DEFAULT_HTTP_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
