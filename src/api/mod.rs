//! API Module
//!
//! Cached HTTP client for the PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area` - Paged list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Pokemon details

mod client;
mod location;
mod pokemon;

pub use client::{ApiConfig, PokeApiClient, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
