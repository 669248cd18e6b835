//! Koronet web service: a dependency status endpoint.
//!
//! Serves `GET /`, probing PostgreSQL and Redis with fresh connections on
//! every request and reporting both outcomes in a plain-text body. The
//! response is always 200; dependency failures are reported in-band.

pub mod config;
pub mod error;
pub mod middleware;
pub mod probe;
pub mod routes;
pub mod shutdown;
pub mod state;
