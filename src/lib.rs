//! Pokedex - An interactive PokeAPI browser
//!
//! Browses location areas and catches Pokemon from a REPL. API responses are
//! memoized in a time-bounded cache that a background task expires.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::{Cache, CacheConfig};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
