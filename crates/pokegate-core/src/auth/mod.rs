//! Username/password authentication and bearer tokens.
//!
//! - Argon2id password hashing
//! - HS256 JWT issuance and verification
//! - SQLite user storage

mod password;
mod service;
mod token;
mod users;

pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use token::{Claims, TokenService};
pub use users::{SqliteUserStore, UserRecord, UserStore};
