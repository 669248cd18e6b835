//! Status endpoint reporting dependency reachability.

use axum::extract::State;
use tracing::instrument;

use crate::probe;
use crate::state::AppState;

/// Status handler for `GET /`.
///
/// Probes PostgreSQL and then Redis with fresh connections and reports both
/// outcomes in a plain-text body. Dependency failures are reported in-band;
/// the response is 200 regardless of probe outcomes, so callers distinguish
/// healthy from degraded state by reading the body.
#[instrument(name = "status::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> String {
    let db_status = probe::database(&state.config.database).await;
    let redis_status = probe::redis(&state.config.redis).await;

    format!("Hi Koronet Team. DB Status: {db_status}. Redis Status: {redis_status}")
}
