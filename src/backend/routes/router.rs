/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (to-do CRUD, health, event stream)
 * 2. CORS layer covering every route
 * 3. Fallback handler (404)
 */

use axum::http::{header, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store pool and broadcast channel
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Cross-Origin Access
///
/// Any origin may call the API with `GET`, `POST`, `PUT` and `DELETE`
/// and a `Content-Type` header, so a client served from elsewhere can
/// reach both the REST endpoints and the event stream.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    router
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not found") })
        .layer(cors)
        .with_state(app_state)
}
