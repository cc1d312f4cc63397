//! Location area documents
//!
//! Paged listing of location areas and the per-area encounter detail.

use serde::Deserialize;

/// A name plus the URL of its full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the location area listing.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, or
/// `None` at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail record for a single location area.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of the pokemon that can be encountered here, in listing order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
