//! The user's collection of caught Pokemon.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokemon and the moment it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name, iterated in name order.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pokemon` as caught now. Re-adding keeps the original capture.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.entries
            .entry(pokemon.name.clone())
            .or_insert_with(|| CaughtPokemon {
                pokemon,
                caught_at: Utc::now(),
            });
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            ..Pokemon::default()
        }
    }

    #[test]
    fn test_names_sorted() {
        let mut dex = Pokedex::new();
        dex.add(pokemon("squirtle"));
        dex.add(pokemon("bulbasaur"));
        dex.add(pokemon("charmander"));

        let names: Vec<_> = dex.names().collect();
        assert_eq!(names, ["bulbasaur", "charmander", "squirtle"]);
    }

    #[test]
    fn test_re_add_keeps_first_capture() {
        let mut dex = Pokedex::new();
        dex.add(pokemon("pikachu"));
        let first = dex.get("pikachu").unwrap().caught_at;

        dex.add(Pokemon {
            height: 99,
            ..pokemon("pikachu")
        });

        let entry = dex.get("pikachu").unwrap();
        assert_eq!(entry.caught_at, first);
        assert_eq!(entry.pokemon.height, 0);
        assert_eq!(dex.len(), 1);
    }

    #[test]
    fn test_empty() {
        let dex = Pokedex::new();
        assert!(dex.is_empty());
        assert!(!dex.contains("mew"));
        assert!(dex.get("mew").is_none());
    }
}
