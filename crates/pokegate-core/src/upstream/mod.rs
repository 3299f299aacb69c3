//! Upstream data source access.
//!
//! This module provides:
//! - A reqwest wrapper with timeout and user agent
//! - The [`EntitySource`] seam and its PokeAPI implementation
//! - Untyped record decoding with total field accessors

mod client;
mod fetcher;
mod record;

pub use client::HttpClient;
pub use fetcher::{decode_record, EntitySource, PokeApiFetcher};
pub use record::{extract_abilities, AbilityList, EntityRecord};
