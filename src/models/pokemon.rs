//! Pokemon model

use serde::Deserialize;

use super::NamedResource;

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Drives the catch roll; higher is harder to catch. `null` for many
    /// alternate forms.
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "stat": {"name": "hp"}},
                {"base_stat": 55, "stat": {"name": "attack"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_pokemon_partial_payload() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"id": 4, "name": "charmander", "base_experience": 62}"#).unwrap();
        assert_eq!(pokemon.name, "charmander");
        assert_eq!(pokemon.height, 0);
        assert!(pokemon.types.is_empty());
    }

    #[test]
    fn test_pokemon_null_base_experience() {
        let json = r#"{"id": 10080, "name": "pikachu-rock-star", "base_experience": null, "height": 4}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "pikachu-rock-star");
        assert_eq!(pokemon.base_experience, None);
        assert_eq!(pokemon.height, 4);
    }

    #[test]
    fn test_pokemon_missing_base_experience() {
        let pokemon: Pokemon = serde_json::from_str(r#"{"id": 1, "name": "bulbasaur"}"#).unwrap();
        assert_eq!(pokemon.base_experience, None);
    }
}
