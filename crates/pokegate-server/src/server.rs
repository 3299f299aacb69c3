//! HTTP server implementation using Axum.

use crate::handlers::{auth, handle_health, pokemon};
use crate::middleware::require_auth;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use pokegate_core::{AuthService, PokemonService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Cached pokemon lookups
    pub pokemon: PokemonService,
    /// Registration, login and token verification
    pub auth: AuthService,
}

impl AppState {
    pub fn new(pokemon: PokemonService, auth: AuthService) -> Self {
        Self { pokemon, auth }
    }
}

/// Build the router. Everything under `/pokemon` requires a bearer token.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/pokemon/random", get(pokemon::random_pokemon))
        .route("/pokemon/:name", get(pokemon::pokemon_by_name))
        .route("/pokemon/:name/ability", get(pokemon::pokemon_abilities))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(handle_health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<SocketAddr> {
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
