//! Health report returned by `GET /api/health`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Always `"ok"` when the server answers
    pub status: String,
    pub server_time: DateTime<Utc>,
    /// Number of live event-stream connections
    pub socket_connections: usize,
}

impl HealthStatus {
    pub fn ok(socket_connections: usize) -> Self {
        Self {
            status: "ok".to_string(),
            server_time: Utc::now(),
            socket_connections,
        }
    }
}
