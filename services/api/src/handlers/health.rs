use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// `GET /healthz` — liveness: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz` — readiness: every database this service talks to answers
/// a ping. One unreachable store takes the instance out of rotation.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    for (name, db) in [
        ("content", &state.content_db),
        ("account", &state.account_db),
        ("player", &state.player_db),
        ("common", &state.common_db),
    ] {
        if let Err(err) = db.ping().await {
            tracing::warn!(database = name, error = %err, "readiness ping failed");
            return StatusCode::SERVICE_UNAVAILABLE;
        }
    }
    StatusCode::OK
}
