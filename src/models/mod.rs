//! Catalog document models
//!
//! Serde mappings for the JSON documents the catalog API returns. Only the
//! fields the explorer displays are mapped; everything else is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
