//! User record persistence.

use crate::{GateError, Result};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    /// PHC-formatted password hash.
    pub password_hash: String,
}

/// Storage for user records.
///
/// All operations are synchronous to match rusqlite's API.
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `UserExists` if the username is taken.
    fn create_user(&self, username: &str, password_hash: &str) -> Result<UserRecord>;

    /// Look a user up by username.
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;
}

/// SQLite-backed user store.
///
/// Thread-safe via internal mutex on the connection.
pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteUserStore {
    /// Open (or create) the database at `db_path`.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GateError::Database {
                message: format!("Failed to create database directory {}: {}", parent.display(), e),
                source: None,
            })?;
        }

        let conn = Connection::open(db_path).map_err(|e| GateError::Database {
            message: format!("Failed to open user database: {}", e),
            source: Some(e),
        })?;

        Self::from_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| GateError::Database {
            message: format!("Failed to open in-memory database: {}", e),
            source: Some(e),
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| GateError::Database {
            message: format!("Failed to initialize user schema: {}", e),
            source: Some(e),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| GateError::Database {
            message: format!("Failed to lock database: {}", e),
            source: None,
        })
    }
}

impl UserStore for SqliteUserStore {
    fn create_user(&self, username: &str, password_hash: &str) -> Result<UserRecord> {
        let conn = self.lock()?;

        match conn.execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![username, password_hash],
        ) {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                return Err(GateError::UserExists {
                    username: username.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        debug!("Stored user {}", username);

        Ok(UserRecord {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT id, username, password FROM users WHERE username = ?1",
            params![username],
            |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(GateError::from)
    }
}
