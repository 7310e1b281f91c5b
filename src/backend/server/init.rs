/**
 * Server Initialization
 *
 * This module assembles the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the store and run migrations
 * 2. Create the event broadcast channel
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the store cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing TodoFlow backend server");

    let db_pool = load_database(&config.database_url).await?;

    let app_state = AppState::new(db_pool, config.broadcast_capacity);
    tracing::info!(
        "Broadcast channel initialized (capacity {})",
        config.broadcast_capacity
    );

    Ok(create_router(app_state))
}
