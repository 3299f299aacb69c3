//! PokeGate HTTP server - routing, auth gate and JSON error mapping on top of
//! `pokegate-core`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState};
