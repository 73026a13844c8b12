//! Location area endpoints

use tracing::debug;

use super::client::{Lookup, PokeApiClient};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetails, LocationAreaPage};

impl PokeApiClient {
    /// Lists one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` cursor from an earlier page; `None` or
    /// an empty string requests the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => self.endpoint("location-area"),
        };

        let page: LocationAreaPage = self.fetch_json(&url, None).await?;
        debug!(url, results = page.results.len(), "Listed location areas");
        Ok(page)
    }

    /// Fetches one location area by name or numeric id.
    pub async fn location_area(&self, name_or_id: &str) -> Result<LocationAreaDetails> {
        if name_or_id.is_empty() {
            return Err(PokedexError::EmptyArgument("location area name or ID"));
        }

        let url = self.endpoint(&format!("location-area/{name_or_id}"));
        let lookup = Lookup {
            kind: "location area",
            name: name_or_id,
        };
        self.fetch_json(&url, Some(lookup)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;
    use crate::cache::Cache;
    use std::time::Duration;

    #[tokio::test]
    async fn test_location_area_empty_argument() {
        let cache = Cache::new(Duration::from_secs(60)).unwrap();
        let client = PokeApiClient::new(&ApiConfig::default(), cache).unwrap();

        let err = client.location_area("").await.unwrap_err();
        assert_eq!(err.to_string(), "location area name or ID cannot be empty");
    }
}
