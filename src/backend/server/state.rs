/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds exactly two shared resources:
 * - the SQLite pool backing the to-do store
 * - the broadcast sender feeding every event stream
 *
 * Both are internally synchronised and cheap to clone. Handlers extract
 * only the parts they use, e.g. `State(pool): State<SqlitePool>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::realtime::{event_channel, RealtimeEventBroadcast};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection pool of the to-do store
    pub db_pool: SqlitePool,

    /// Sender for committed-mutation events
    ///
    /// Each open event stream holds one receiver.
    pub realtime_broadcast: RealtimeEventBroadcast,
}

impl AppState {
    /// Build the state around an already-migrated pool
    ///
    /// # Arguments
    ///
    /// * `db_pool` - Pool with the `todos` table in place
    /// * `broadcast_capacity` - Events a slow subscriber may fall behind before skipping
    pub fn new(db_pool: SqlitePool, broadcast_capacity: usize) -> Self {
        Self {
            db_pool,
            realtime_broadcast: event_channel(broadcast_capacity),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for RealtimeEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime_broadcast.clone()
    }
}
