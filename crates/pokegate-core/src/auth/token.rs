//! HS256 bearer tokens.
//!
//! One issuance policy for every flow: a single shared secret and a single
//! lifetime taken from [`TokenSettings`].

use crate::cache::{Clock, SystemClock};
use crate::config::TokenSettings;
use crate::{GateError, Result};
use chrono::TimeDelta;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(settings: &TokenSettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Create a service whose issue time comes from `clock`.
    ///
    /// Verification always checks expiry against the wall clock.
    pub fn with_clock(settings: &TokenSettings, clock: Arc<dyn Clock>) -> Self {
        let secret = settings.secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: TimeDelta::from_std(settings.ttl()).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// Issue a token for `subject`.
    pub fn issue(&self, subject: &str) -> Result<String> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| GateError::Token {
            message: "token expiry out of range".to_string(),
        })?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            GateError::Token {
                message: e.to_string(),
            }
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Malformed, mis-signed and expired tokens all produce the same
    /// `Unauthorized` error.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                GateError::unauthorized("Invalid or expired token")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use chrono::Utc;
    use std::time::Duration;

    fn settings(secret: &str) -> TokenSettings {
        TokenSettings::from_hours(secret, 24).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(&settings("s3cret"));
        let token = service.issue("ash").unwrap();

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, "ash");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenService::new(&settings("one")).issue("ash").unwrap();
        let err = TokenService::new(&settings("two")).verify(&token).unwrap_err();
        assert!(matches!(err, GateError::Unauthorized { .. }));
    }

    #[test]
    fn test_expired_token_rejected() {
        let clock = Arc::new(ManualClock::new(Utc::now() - TimeDelta::days(2)));
        let issuer = TokenService::with_clock(&settings("s3cret"), clock);
        let token = issuer.issue("ash").unwrap();

        let err = TokenService::new(&settings("s3cret")).verify(&token).unwrap_err();
        assert_eq!(err.public_message(), "Invalid or expired token");
    }

    #[test]
    fn test_garbage_rejected() {
        let service = TokenService::new(&settings("s3cret"));
        assert!(service.verify("").is_err());
        assert!(service.verify("not.a.jwt").is_err());
    }

    #[test]
    fn test_custom_lifetime() {
        let settings = TokenSettings::new("s3cret", Duration::from_secs(72 * 3600)).unwrap();
        let service = TokenService::new(&settings);
        let claims = service.verify(&service.issue("misty").unwrap()).unwrap();
        assert_eq!(claims.exp - claims.iat, 72 * 3600);
    }
}
