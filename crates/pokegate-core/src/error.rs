//! Error types for PokeGate.
//!
//! A single error enum covers the request-facing taxonomy (bad input, auth,
//! upstream failures) as well as the internal failures of the glue layers
//! (hashing, token signing, user storage).

use thiserror::Error;

/// Main error type for the PokeGate library.
#[derive(Debug, Error)]
pub enum GateError {
    // Request errors
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Invalid username or password")]
    InvalidCredentials,

    // Upstream errors
    #[error("Pokemon not found: {name}")]
    NotFound { name: String },

    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Malformed upstream response: {message}")]
    MalformedResponse { message: String },

    // User errors
    #[error("Username already exists: {username}")]
    UserExists { username: String },

    // Internal errors
    #[error("Password hashing failed: {message}")]
    PasswordHash { message: String },

    #[error("Token error: {message}")]
    Token { message: String },

    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for PokeGate operations.
pub type Result<T> = std::result::Result<T, GateError>;

impl From<serde_json::Error> for GateError {
    fn from(err: serde_json::Error) -> Self {
        GateError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<rusqlite::Error> for GateError {
    fn from(err: rusqlite::Error) -> Self {
        GateError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl GateError {
    /// Create an `Unauthorized` error with a caller-visible reason.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        GateError::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a `BadRequest` error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        GateError::BadRequest {
            message: message.into(),
        }
    }

    /// Map to the HTTP status code returned at the request boundary.
    ///
    /// - 400: malformed input
    /// - 401: missing/invalid token or bad credentials
    /// - 404: upstream has no such entity
    /// - 502: upstream transport failure or undecodable payload
    /// - 500: hashing, signing, storage and everything else
    pub fn http_status(&self) -> u16 {
        match self {
            GateError::BadRequest { .. } => 400,

            GateError::Unauthorized { .. } | GateError::InvalidCredentials => 401,

            GateError::NotFound { .. } => 404,

            GateError::UpstreamUnavailable { .. } | GateError::MalformedResponse { .. } => 502,

            _ => 500,
        }
    }

    /// Message safe to show to API callers.
    ///
    /// Internal failures collapse to a generic string so storage or crypto
    /// details never leak into responses.
    pub fn public_message(&self) -> String {
        match self {
            GateError::BadRequest { message } | GateError::Unauthorized { message } => {
                message.clone()
            }
            GateError::InvalidCredentials => "Invalid username or password".to_string(),
            GateError::NotFound { .. } => "Pokemon not found".to_string(),
            GateError::UpstreamUnavailable { .. } | GateError::MalformedResponse { .. } => {
                "Upstream service unavailable".to_string()
            }
            GateError::UserExists { .. } | GateError::Database { .. } => {
                "Error registering user".to_string()
            }
            GateError::PasswordHash { .. } => "Error hashing password".to_string(),
            GateError::Token { .. } => "Error generating token".to_string(),
            GateError::Json { .. } | GateError::Config { .. } => {
                "Internal server error".to_string()
            }
        }
    }
}
