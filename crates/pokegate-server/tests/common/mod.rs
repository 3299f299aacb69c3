//! Shared helpers: a stub upstream and an in-process gateway.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokegate_core::{
    AuthService, LookupCache, PokeApiFetcher, PokemonService, SqliteUserStore, TokenService,
    TokenSettings,
};
use pokegate_server::{start_server, AppState};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-secret";

/// Counters and switches for the stub upstream.
#[derive(Default)]
pub struct StubUpstream {
    hits: AtomicUsize,
    offline: AtomicBool,
}

impl StubUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }
}

pub fn pikachu() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "abilities": [
            {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "slot": 3}
        ]
    })
}

async fn stub_pokemon(State(stub): State<Arc<StubUpstream>>, Path(key): Path<String>) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    if stub.offline.load(Ordering::SeqCst) {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    if let Ok(id) = key.parse::<u32>() {
        return Json(json!({"id": id, "name": format!("pokemon-{}", id)})).into_response();
    }

    match key.as_str() {
        "pikachu" => Json(pikachu()).into_response(),
        "ditto" => Json(json!({"id": 132, "name": "ditto"})).into_response(),
        "garbage" => (StatusCode::OK, "<html>definitely not json</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Serve a fake `/api/v2/pokemon/:key` on an ephemeral port.
///
/// Returns the base URL to hand to the fetcher.
pub async fn start_stub_upstream() -> (String, Arc<StubUpstream>) {
    let stub = Arc::new(StubUpstream::default());
    let app = Router::new()
        .route("/api/v2/pokemon/:key", get(stub_pokemon))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/v2/pokemon", addr), stub)
}

/// Start the gateway in-process against `upstream_base`.
pub async fn start_gateway(upstream_base: &str) -> SocketAddr {
    let fetcher = PokeApiFetcher::with_base_url(upstream_base).unwrap();
    let pokemon = PokemonService::new(Arc::new(fetcher), Arc::new(LookupCache::new()));
    let auth = AuthService::new(
        Arc::new(SqliteUserStore::in_memory().unwrap()),
        TokenService::new(&TokenSettings::from_hours(TEST_SECRET, 24).unwrap()),
    );

    start_server(Arc::new(AppState::new(pokemon, auth)), "127.0.0.1", 0)
        .await
        .unwrap()
}

/// Start a stub upstream plus a gateway in front of it.
pub async fn start_stack() -> (String, Arc<StubUpstream>) {
    let (upstream, stub) = start_stub_upstream().await;
    let addr = start_gateway(&upstream).await;
    (format!("http://{}", addr), stub)
}

/// Register `username` and return a login token.
pub async fn register_and_login(client: &reqwest::Client, base: &str, username: &str) -> String {
    let credentials = json!({"username": username, "password": "hunter2"});

    let response = client
        .post(format!("{}/register", base))
        .json(&credentials)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = client
        .post(format!("{}/login", base))
        .json(&credentials)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    body["token"].as_str().expect("login returns a token").to_string()
}
