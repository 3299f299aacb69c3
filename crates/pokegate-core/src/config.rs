//! Centralized configuration for PokeGate.
//!
//! Compile-time defaults live on associated constants; values that operators
//! may override at startup (token secret and lifetime) are carried in
//! [`TokenSettings`].

use crate::{GateError, Result};
use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "PokeGate";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_DATABASE_PATH: &'static str = "users.db";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const POKEAPI_BASE: &'static str = "https://pokeapi.co/api/v2/pokemon";
    pub const USER_AGENT: &'static str = "PokeGate/0.1";
}

/// In-memory cache configuration.
pub struct CacheConfig;

impl CacheConfig {
    /// Lifetime of a cache entry (10 minutes).
    pub const DEFAULT_TTL: Duration = Duration::from_secs(600);
    pub const ENTITY_KEY_PREFIX: &'static str = "pokemon";
    pub const ABILITY_KEY_PREFIX: &'static str = "ability";
}

/// Upstream catalog configuration.
pub struct CatalogConfig;

impl CatalogConfig {
    /// Highest pokedex number served by the random endpoint.
    pub const SIZE: u32 = 898;
}

/// Authentication configuration.
pub struct AuthConfig;

impl AuthConfig {
    pub const DEFAULT_SECRET: &'static str = "secret";
    pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
    pub const BEARER_SCHEME: &'static str = "Bearer";
}

/// Runtime token issuance policy: one secret, one lifetime.
#[derive(Clone)]
pub struct TokenSettings {
    secret: String,
    ttl: Duration,
}

impl TokenSettings {
    /// Create settings, rejecting an empty secret or a zero lifetime.
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(GateError::Config {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if ttl.is_zero() {
            return Err(GateError::Config {
                message: "token lifetime must be greater than zero".to_string(),
            });
        }
        Ok(Self { secret, ttl })
    }

    /// Build settings from a secret and a lifetime expressed in hours.
    pub fn from_hours(secret: impl Into<String>, hours: u64) -> Result<Self> {
        Self::new(secret, Duration::from_secs(hours.saturating_mul(3600)))
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            secret: AuthConfig::DEFAULT_SECRET.to_string(),
            ttl: Duration::from_secs(AuthConfig::DEFAULT_TOKEN_TTL_HOURS * 3600),
        }
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}
