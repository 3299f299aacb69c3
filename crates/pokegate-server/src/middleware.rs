//! Bearer token gate for protected routes.

use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use pokegate_core::config::AuthConfig;
use std::sync::Arc;
use tracing::debug;

/// Subject of a verified token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Reject requests without a valid `Authorization: Bearer <token>` header.
///
/// Rejected requests never reach the handler, so no upstream call is made.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        debug!(path = %req.uri().path(), "No Authorization header");
        return ApiError::unauthorized("Authorization header missing").into_response();
    };

    let Some(token) = header.to_str().ok().and_then(bearer_token) else {
        return ApiError::unauthorized("Token missing").into_response();
    };

    match state.auth.verify_token(token) {
        Ok(claims) => {
            debug!(subject = %claims.sub, "Token validated");
            req.extensions_mut().insert(AuthenticatedUser(claims.sub));
            next.run(req).await
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Token from an `Authorization` value; the scheme is matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(AuthConfig::BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
