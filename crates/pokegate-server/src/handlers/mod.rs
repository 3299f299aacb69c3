//! HTTP request handlers, split by domain.

pub mod auth;
pub mod pokemon;

use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
