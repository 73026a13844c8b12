//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, the PokeAPI client and the REPL.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// A configuration value was rejected (zero interval, bad URL, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The cache was built outside of a Tokio runtime and cannot start its reaper
    #[error("Cache must be created inside a Tokio runtime")]
    NoRuntime,

    /// A required lookup argument was empty
    #[error("{0} cannot be empty")]
    EmptyArgument(&'static str),

    /// The API answered 404 for a named resource
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// The API answered with any other non-success status
    #[error("API request to {url} failed with status code {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Transport-level failure (connect, timeout, body read)
    #[error("error making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("error unmarshalling JSON for {url}: {source} (Response: {body})")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// A lookup failed while exploring a named resource
    #[error("could not get details for {name}: {source}")]
    Details {
        name: String,
        #[source]
        source: Box<PokedexError>,
    },

    /// A REPL command was called with the wrong arguments
    #[error("{0}")]
    Usage(String),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
