//! Cache-then-fetch coordination for pokemon lookups.
//!
//! Order of operations for the cached lookups:
//! 1. Derive the cache key from operation + normalised name
//! 2. Serve a live cache entry if present
//! 3. Otherwise fetch upstream; failures are returned and never cached
//! 4. Store the result (the extracted list for abilities) and return it
//!
//! Random lookups bypass the cache entirely.

use crate::cache::ExpiringCache;
use crate::config::{CacheConfig, CatalogConfig};
use crate::upstream::{AbilityList, EntityRecord, EntitySource};
use crate::Result;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

/// Values held in the shared lookup cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Entity(EntityRecord),
    Abilities(AbilityList),
}

/// Shared cache type used by [`PokemonService`].
pub type LookupCache = ExpiringCache<CachedValue>;

/// Cache key for a full record lookup.
pub fn entity_key(name: &str) -> String {
    format!("{}_{}", CacheConfig::ENTITY_KEY_PREFIX, name)
}

/// Cache key for an ability-list lookup.
pub fn ability_key(name: &str) -> String {
    format!("{}_{}", CacheConfig::ABILITY_KEY_PREFIX, name)
}

/// Trim and lower-case a user supplied name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Draw a pokedex number uniformly from `1..=catalog_size`.
///
/// A zero-sized catalog is treated as size one.
pub fn pick_random_id<R: Rng + ?Sized>(rng: &mut R, catalog_size: u32) -> u32 {
    rng.random_range(1..=catalog_size.max(1))
}

/// Coordinates the lookup cache and the upstream source.
pub struct PokemonService {
    source: Arc<dyn EntitySource>,
    cache: Arc<LookupCache>,
    catalog_size: u32,
}

impl PokemonService {
    /// Create a service over an explicitly constructed cache.
    pub fn new(source: Arc<dyn EntitySource>, cache: Arc<LookupCache>) -> Self {
        Self {
            source,
            cache,
            catalog_size: CatalogConfig::SIZE,
        }
    }

    /// Override the upper bound used by [`PokemonService::random_pokemon`].
    pub fn with_catalog_size(mut self, catalog_size: u32) -> Self {
        self.catalog_size = catalog_size.max(1);
        self
    }

    pub fn cache(&self) -> &Arc<LookupCache> {
        &self.cache
    }

    /// Full record for `name`, served from cache when fresh.
    pub async fn pokemon_by_name(&self, name: &str) -> Result<EntityRecord> {
        let name = normalize_name(name);
        let key = entity_key(&name);

        if let Some(CachedValue::Entity(record)) = self.cache.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(record);
        }

        debug!("Cache miss for {}, fetching upstream", key);
        let record = self.source.fetch_by_name(&name).await?;
        self.cache.set(&key, CachedValue::Entity(record.clone()));
        Ok(record)
    }

    /// Ability names for `name`, cached separately from the full record.
    pub async fn pokemon_abilities(&self, name: &str) -> Result<AbilityList> {
        let name = normalize_name(name);
        let key = ability_key(&name);

        if let Some(CachedValue::Abilities(abilities)) = self.cache.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(abilities);
        }

        debug!("Cache miss for {}", key);
        let record = self.pokemon_by_name(&name).await?;
        let abilities = record.abilities();
        self.cache.set(&key, CachedValue::Abilities(abilities.clone()));
        Ok(abilities)
    }

    /// A uniformly chosen record. Always fetched, never cached.
    pub async fn random_pokemon(&self) -> Result<EntityRecord> {
        let id = pick_random_id(&mut rand::rng(), self.catalog_size);
        debug!("Fetching random pokemon #{}", id);
        self.source.fetch_by_id(id).await
    }
}
