//! Error types for dependency probes.

/// Failure while probing an external dependency.
///
/// Both variants render as the underlying client library's message, which
/// is treated as an opaque diagnostic string. Probe errors never reach the
/// HTTP layer as a fault; they are converted to an in-band status at the
/// probe boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}
