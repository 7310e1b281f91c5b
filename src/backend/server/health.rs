//! `GET /api/health`

use axum::{extract::State, Json};

use crate::backend::realtime::{connection_count, RealtimeEventBroadcast};
use crate::shared::HealthStatus;

/// Report liveness, server time and the number of open event streams
pub async fn health(State(broadcast_tx): State<RealtimeEventBroadcast>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(connection_count(&broadcast_tx)))
}
