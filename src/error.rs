//! Error types for the explorer
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; every variant here belongs to fetching, decoding or the REPL.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the explorer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request could not be sent or its body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body is not the expected JSON document
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A command was given without its required argument
    #[error("missing argument, expected <{0}>")]
    MissingArgument(&'static str),

    /// The first word of the input is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// `inspect` was asked about a pokemon not in the pokedex
    #[error("{0} has not been caught yet")]
    NotCaught(String),

    /// Writing command output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
