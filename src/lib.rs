//! Pokedex - A command-line catalog explorer
//!
//! Pages through location areas, explores them and catches pokemon, memoizing
//! raw API responses in a time-expiring cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ResponseCache;
pub use client::CatalogClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
