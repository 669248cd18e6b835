//! Per-request dependency probes.
//!
//! Each probe opens a fresh connection, issues a minimal liveness command,
//! and closes the connection before returning. Outcomes are independent: a
//! database failure never affects the cache probe and vice versa. Failures
//! are captured as an in-band status rather than propagated; timeouts are
//! whatever the client libraries apply by default.

use std::fmt;

use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, Connection, Executor};

use crate::config::{DatabaseConfig, RedisConfig};
use crate::error::ProbeError;

/// Outcome of a single dependency probe. Computed per request, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Connected,
    Error(String),
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResult::Connected => f.write_str("Connected"),
            ProbeResult::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Probe PostgreSQL: connect, run `SELECT 1`, close.
///
/// Any failure at connect, query, or close collapses into
/// `ProbeResult::Error` carrying the library's diagnostic message.
pub async fn database(config: &DatabaseConfig) -> ProbeResult {
    match check_database(config).await {
        Ok(()) => ProbeResult::Connected,
        Err(e) => {
            tracing::warn!(error = %e, "Database probe failed");
            ProbeResult::Error(e.to_string())
        }
    }
}

async fn check_database(config: &DatabaseConfig) -> Result<(), ProbeError> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .password(&config.password);

    let mut conn = options.connect().await?;
    conn.execute("SELECT 1").await?;
    conn.close().await?;
    Ok(())
}

/// Probe Redis: connect and issue `PING`.
pub async fn redis(config: &RedisConfig) -> ProbeResult {
    match check_redis(config).await {
        Ok(()) => ProbeResult::Connected,
        Err(e) => {
            tracing::warn!(error = %e, "Redis probe failed");
            ProbeResult::Error(e.to_string())
        }
    }
}

async fn check_redis(config: &RedisConfig) -> Result<(), ProbeError> {
    let client = redis::Client::open(config.url())?;
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(())
}
