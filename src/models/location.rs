//! Location area models

use serde::Deserialize;

/// A `{ name, url }` reference as PokeAPI embeds them everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// `next`/`previous` are absolute URLs of the neighbouring pages, `None` at the
/// ends of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationAreaDetails {
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "count": 2,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 2);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_details_deserialize_without_encounters() {
        let details: LocationAreaDetails = serde_json::from_str(r#"{"name": "empty-area"}"#).unwrap();
        assert_eq!(details.name, "empty-area");
        assert!(details.pokemon_encounters.is_empty());
    }

    #[test]
    fn test_encounter_without_url() {
        let json = r#"{"name": "a", "pokemon_encounters": [{"pokemon": {"name": "pidgey"}}]}"#;
        let details: LocationAreaDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.pokemon_encounters[0].pokemon.name, "pidgey");
        assert_eq!(details.pokemon_encounters[0].pokemon.url, "");
    }
}
