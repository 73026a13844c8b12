//! Pokemon endpoint

use super::client::{Lookup, PokeApiClient};
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

impl PokeApiClient {
    /// Fetches a Pokemon by name or numeric id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        if name.is_empty() {
            return Err(PokedexError::EmptyArgument("pokemon name"));
        }

        let url = self.endpoint(&format!("pokemon/{name}"));
        self.fetch_json(&url, Some(Lookup { kind: "pokemon", name }))
            .await
    }
}
