//! PokeGate Server - authenticated, cached PokeAPI facade.

use anyhow::Result;
use clap::Parser;
use pokegate_core::config::{AppConfig, AuthConfig, NetworkConfig};
use pokegate_core::{
    AuthService, LookupCache, PokeApiFetcher, PokemonService, SqliteUserStore, TokenService,
    TokenSettings,
};
use pokegate_server::{start_server, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pokegate-server")]
#[command(about = "Authenticated, cached PokeAPI facade")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "PORT", default_value_t = AppConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = AppConfig::DEFAULT_HOST)]
    host: String,

    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", default_value = AuthConfig::DEFAULT_SECRET, hide_env_values = true)]
    jwt_secret: String,

    /// Token lifetime in hours
    #[arg(long, env = "TOKEN_TTL_HOURS", default_value_t = AuthConfig::DEFAULT_TOKEN_TTL_HOURS)]
    token_ttl_hours: u64,

    /// SQLite database holding user records
    #[arg(long, env = "DATABASE_PATH", default_value = AppConfig::DEFAULT_DATABASE_PATH)]
    database: PathBuf,

    /// Base URL of the upstream pokemon endpoint
    #[arg(long, env = "UPSTREAM_URL", default_value = NetworkConfig::POKEAPI_BASE)]
    upstream_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting {}", AppConfig::APP_NAME);

    let token_settings = TokenSettings::from_hours(args.jwt_secret, args.token_ttl_hours)?;
    if token_settings.secret() == AuthConfig::DEFAULT_SECRET {
        warn!("JWT_SECRET not set, using the built-in default secret");
    }

    let users = SqliteUserStore::new(&args.database)?;
    info!("User database: {}", args.database.display());

    let fetcher = PokeApiFetcher::with_base_url(&args.upstream_url)?;
    info!("Upstream: {}", fetcher.base_url());

    // One cache for the whole process, handed to the service explicitly
    let cache = Arc::new(LookupCache::new());

    let state = AppState::new(
        PokemonService::new(Arc::new(fetcher), cache),
        AuthService::new(Arc::new(users), TokenService::new(&token_settings)),
    );

    let addr = start_server(Arc::new(state), &args.host, args.port).await?;
    info!("Server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
