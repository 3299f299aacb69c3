//! Pokemon lookup handlers.
//!
//! Upstream failures are logged with full detail and collapsed into the
//! per-endpoint messages callers expect.

use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use pokegate_core::{AbilityList, EntityRecord};
use std::sync::Arc;
use tracing::{debug, warn};

/// `GET /pokemon/:name`
pub async fn pokemon_by_name(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<Json<EntityRecord>, ApiError> {
    debug!(user = %user.0, %name, "Pokemon lookup");
    state.pokemon.pokemon_by_name(&name).await.map(Json).map_err(|e| {
        warn!(%name, "Pokemon lookup failed: {}", e);
        ApiError::not_found("Pokemon not found")
    })
}

/// `GET /pokemon/:name/ability`
pub async fn pokemon_abilities(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<AbilityList>, ApiError> {
    state.pokemon.pokemon_abilities(&name).await.map(Json).map_err(|e| {
        warn!(%name, "Ability lookup failed: {}", e);
        ApiError::not_found("Ability not found")
    })
}

/// `GET /pokemon/random`
pub async fn random_pokemon(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EntityRecord>, ApiError> {
    state.pokemon.random_pokemon().await.map(Json).map_err(|e| {
        warn!("Random pokemon fetch failed: {}", e);
        ApiError::internal("Error fetching random Pokemon")
    })
}
