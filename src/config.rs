//! Configuration loading and constants.
//!
//! All settings are resolved from environment variables once at process
//! start, with documented defaults applying when a variable is absent.
//! `AppConfig` is the root configuration struct; it is immutable after
//! startup and shared with handlers through `AppState`.

use std::env;
use std::num::ParseIntError;

// =============================================================================
// Defaults
// =============================================================================

/// Default PostgreSQL host
pub const DEFAULT_DB_HOST: &str = "localhost";
/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;
/// Default PostgreSQL database name
pub const DEFAULT_DB_NAME: &str = "koronet_db";
/// Default PostgreSQL user
pub const DEFAULT_DB_USER: &str = "koronet_user";
/// Default PostgreSQL password
pub const DEFAULT_DB_PASSWORD: &str = "koronet_password";

/// Default Redis host
pub const DEFAULT_REDIS_HOST: &str = "localhost";
/// Default Redis port
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Default HTTP bind address (all interfaces)
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "koronet_web=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Cache-Control header value for the status route. Probe results must
/// never be served stale by an intermediary.
pub const CACHE_CONTROL_STATUS: &str = "no-store";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// PostgreSQL connection settings
    pub database: DatabaseConfig,
    /// Redis connection settings
    pub redis: RedisConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

/// PostgreSQL settings used to build a fresh connection per probe
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

/// Redis settings used to build a fresh connection per probe
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

impl RedisConfig {
    /// Connection URL accepted by `redis::Client::open`.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Resolve the full configuration from the environment.
    ///
    /// Missing variables fall back to their defaults. A present but
    /// unparseable numeric variable is a startup error rather than
    /// something to discover on the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http: HttpConfig {
                host: env_or("HTTP_HOST", DEFAULT_HTTP_HOST),
                port: port_from_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            },
            database: DatabaseConfig {
                host: env_or("DB_HOST", DEFAULT_DB_HOST),
                port: port_from_env("DB_PORT", DEFAULT_DB_PORT)?,
                name: env_or("DB_NAME", DEFAULT_DB_NAME),
                user: env_or("DB_USER", DEFAULT_DB_USER),
                password: env_or("DB_PASSWORD", DEFAULT_DB_PASSWORD),
            },
            redis: RedisConfig {
                host: env_or("REDIS_HOST", DEFAULT_REDIS_HOST),
                port: port_from_env("REDIS_PORT", DEFAULT_REDIS_PORT)?,
            },
            logging: LoggingConfig {
                format: env_or("LOG_FORMAT", DEFAULT_LOG_FORMAT),
            },
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

fn port_from_env(var: &str, default: u16) -> Result<u16, ConfigError> {
    match env::var(var) {
        Ok(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
            var: var.to_string(),
            value,
            source,
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {var}: {source}")]
    InvalidPort {
        var: String,
        value: String,
        source: ParseIntError,
    },
}
