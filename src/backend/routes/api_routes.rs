/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## To-dos
 * - `GET /api/todos` - List every to-do, newest first
 * - `POST /api/todos` - Create a to-do
 * - `PUT /api/todos/{id}` - Partially update a to-do
 * - `DELETE /api/todos/{id}` - Delete a to-do
 *
 * ## Real-time
 * - `GET /api/events?clientId=` - Server-sent event stream of committed mutations
 *
 * ## Health
 * - `GET /api/health` - Liveness and open stream count
 */

use axum::routing::{get, put};
use axum::Router;

use crate::backend::realtime::handle_event_subscription;
use crate::backend::server::health::health;
use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, list_todos, update_todo};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/api/events", get(handle_event_subscription))
        .route("/api/health", get(health))
}
