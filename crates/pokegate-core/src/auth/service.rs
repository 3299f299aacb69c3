//! Registration and login.

use super::password::{hash_password, verify_password};
use super::token::{Claims, TokenService};
use super::users::UserStore;
use crate::{GateError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Username/password auth on top of a user store and a token service.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user. The password is hashed once before storage.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        let username = validate_credentials(username, password)?;

        if self.users.find_by_username(username)?.is_some() {
            return Err(GateError::UserExists {
                username: username.to_string(),
            });
        }

        let password_hash = hash_password(password)?;
        self.users.create_user(username, &password_hash)?;

        info!("Registered user {}", username);
        Ok(())
    }

    /// Check credentials and issue a token.
    ///
    /// Unknown users and wrong passwords fail identically.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let username = validate_credentials(username, password)?;

        let Some(user) = self.users.find_by_username(username)? else {
            debug!("Login for unknown user {}", username);
            return Err(GateError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash) {
            debug!("Wrong password for {}", username);
            return Err(GateError::InvalidCredentials);
        }

        self.tokens.issue(&user.username)
    }

    /// Verify a bearer token.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.tokens.verify(token)
    }
}

fn validate_credentials<'a>(username: &'a str, password: &str) -> Result<&'a str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(GateError::bad_request("Username and password are required"));
    }
    Ok(username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SqliteUserStore;
    use crate::config::TokenSettings;

    fn create_service() -> AuthService {
        let users = Arc::new(SqliteUserStore::in_memory().unwrap());
        let tokens = TokenService::new(&TokenSettings::default());
        AuthService::new(users, tokens)
    }

    #[test]
    fn test_register_then_login() {
        let service = create_service();
        service.register("ash", "pikachu").unwrap();

        let token = service.login("ash", "pikachu").unwrap();
        assert_eq!(service.verify_token(&token).unwrap().sub, "ash");
    }

    #[test]
    fn test_duplicate_registration() {
        let service = create_service();
        service.register("ash", "pikachu").unwrap();

        let err = service.register("ash", "other").unwrap_err();
        assert!(matches!(err, GateError::UserExists { .. }));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn test_bad_credentials() {
        let service = create_service();
        service.register("ash", "pikachu").unwrap();

        assert!(matches!(
            service.login("ash", "raichu"),
            Err(GateError::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("gary", "eevee"),
            Err(GateError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_empty_fields_rejected() {
        let service = create_service();
        assert_eq!(service.register("  ", "pw").unwrap_err().http_status(), 400);
        assert_eq!(service.login("ash", "").unwrap_err().http_status(), 400);
    }
}
