//! PokeGate Core - caching PokeAPI facade with username/password auth.
//!
//! This crate holds everything behind the HTTP surface: the expiring lookup
//! cache, the upstream fetcher, the cache-then-fetch coordinator, and the auth
//! glue (user store, password hashing, tokens). It can be used without the
//! server crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokegate_core::{LookupCache, PokeApiFetcher, PokemonService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pokegate_core::Result<()> {
//!     let cache = Arc::new(LookupCache::new());
//!     let service = PokemonService::new(Arc::new(PokeApiFetcher::new()?), cache);
//!
//!     let abilities = service.pokemon_abilities("pikachu").await?;
//!     println!("{:?}", abilities);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod retrieval;
pub mod upstream;

// Re-export commonly used types
pub use auth::{AuthService, Claims, SqliteUserStore, TokenService, UserRecord, UserStore};
pub use cache::{Clock, ExpiringCache, ManualClock, SystemClock};
pub use config::TokenSettings;
pub use error::{GateError, Result};
pub use retrieval::{CachedValue, LookupCache, PokemonService};
pub use upstream::{AbilityList, EntityRecord, EntitySource, HttpClient, PokeApiFetcher};
