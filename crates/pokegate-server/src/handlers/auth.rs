//! Registration and login handlers.

use crate::error::ApiError;
use crate::server::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use pokegate_core::GateError;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Request body for `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn decode_body(payload: Result<Json<Credentials>, JsonRejection>) -> Result<Credentials, ApiError> {
    payload.map(|Json(body)| body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::bad_request("Invalid request body")
    })
}

/// `POST /register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = decode_body(payload)?;

    // Argon2 is CPU bound; keep it off the async workers
    let result = tokio::task::spawn_blocking(move || {
        state.auth.register(&body.username, &body.password)
    })
    .await
    .map_err(|e| {
        error!("Registration task failed: {}", e);
        ApiError::internal("Error registering user")
    })?;

    match result {
        Ok(()) => Ok(Json(json!({ "message": "User registered successfully" }))),
        Err(e @ GateError::BadRequest { .. }) => Err(e.into()),
        Err(e @ GateError::PasswordHash { .. }) => {
            error!("Password hashing failed: {}", e);
            Err(ApiError::internal("Error hashing password"))
        }
        Err(e) => {
            warn!("Registration failed: {}", e);
            Err(ApiError::internal("Error registering user"))
        }
    }
}

/// `POST /login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = decode_body(payload)?;

    let result = tokio::task::spawn_blocking(move || {
        state.auth.login(&body.username, &body.password)
    })
    .await
    .map_err(|e| {
        error!("Login task failed: {}", e);
        ApiError::internal("Error generating token")
    })?;

    match result {
        Ok(token) => Ok(Json(json!({ "token": token }))),
        Err(e @ GateError::BadRequest { .. }) => Err(e.into()),
        Err(GateError::InvalidCredentials) => {
            Err(ApiError::unauthorized("Invalid username or password"))
        }
        Err(e) => {
            error!("Login failed: {}", e);
            Err(ApiError::internal("Error generating token"))
        }
    }
}
