//! Koronet web service entry point.
//!
//! Initializes tracing, resolves configuration from the environment, sets
//! up the Axum router, and serves until SIGTERM or Ctrl+C.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use koronet_web::config::{AppConfig, DEFAULT_LOG_FILTER};
use koronet_web::routes::create_router;
use koronet_web::shutdown::shutdown_signal;
use koronet_web::state::AppState;

/// Koronet web service: reports database and cache reachability
#[derive(Parser, Debug)]
#[command(name = "koronet-web", version, about)]
struct Args {
    /// Log level filter (e.g., "koronet_web=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Pick up a local .env file before reading configuration
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Log the resolved configuration (never the password)
    tracing::info!(
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.name,
        db_user = %config.database.user,
        redis_host = %config.redis.host,
        redis_port = config.redis.port,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
