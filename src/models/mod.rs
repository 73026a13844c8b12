//! PokeAPI response models
//!
//! Serde DTOs for the subset of PokeAPI resources the Pokedex reads. Fields the
//! REPL never displays are left out; missing fields fall back to defaults.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetails, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
