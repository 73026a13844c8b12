//! PokeAPI HTTP client
//!
//! Every request goes through the response cache first. Only successful
//! bodies are cached, and they are cached raw, before JSON decoding.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};

/// Public PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default per-request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Connection settings for [`PokeApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root without trailing slash, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

/// What a 404 means for a given request, if anything.
pub(super) struct Lookup<'a> {
    pub kind: &'static str,
    pub name: &'a str,
}

/// Cached client for the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Builds a client that memoizes responses in `cache`.
    pub fn new(config: &ApiConfig, cache: Cache) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // == Fetch ==
    /// Returns the raw body for `url`, from cache when possible.
    ///
    /// A 404 becomes `NotFound` when `lookup` names the resource; any other
    /// non-2xx status becomes `Status`.
    pub(super) async fn fetch(&self, url: &str, lookup: Option<Lookup<'_>>) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss, requesting");
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            if let Some(Lookup { kind, name }) = lookup {
                return Err(PokedexError::NotFound {
                    kind,
                    name: name.to_string(),
                });
            }
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    // == Fetch JSON ==
    /// Fetches `url` and decodes the body as `T`.
    pub(super) async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        lookup: Option<Lookup<'_>>,
    ) -> Result<T> {
        let body = self.fetch(url, lookup).await?;
        decode(url, &body)
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| PokedexError::Decode {
        url: url.to_string(),
        source,
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
