//! Client Module
//!
//! The fetch layer between the REPL and the catalog API. Every request goes
//! through the response cache first.

mod catalog;

pub use catalog::CatalogClient;
