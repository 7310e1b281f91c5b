//! Common test utilities and helpers
//!
//! - In-memory application state and routers
//! - `axum-test` servers for request/response tests
//! - Real listeners for the event stream and the desktop client
//! - Custom assertion macros

pub mod assertions;

use std::net::SocketAddr;

use axum_test::TestServer;
use todoflow::backend::routes::create_router;
use todoflow::backend::server::{config::load_database, AppState};
use todoflow::shared::TodoEvent;
use tokio::sync::broadcast;
use tokio::time::{timeout, Duration};

pub use assertions::*;

/// State backed by a fresh in-memory database
pub async fn test_state() -> AppState {
    test_state_with_capacity(64).await
}

/// Same as [`test_state`] with a chosen event channel capacity
pub async fn test_state_with_capacity(capacity: usize) -> AppState {
    let pool = load_database("sqlite::memory:")
        .await
        .expect("in-memory database");
    AppState::new(pool, capacity)
}

/// `axum-test` server plus the state behind it
pub async fn test_server() -> (TestServer, AppState) {
    let state = test_state().await;
    let server = TestServer::new(create_router(state.clone())).expect("test server");
    (server, state)
}

/// Serve the app on an ephemeral loopback port
pub async fn spawn_server() -> (SocketAddr, AppState) {
    spawn_server_with_capacity(64).await
}

/// Serve the app with a chosen event channel capacity
pub async fn spawn_server_with_capacity(capacity: usize) -> (SocketAddr, AppState) {
    let state = test_state_with_capacity(capacity).await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let app = create_router(state.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    (addr, state)
}

/// Next event on `rx`, failing the test after two seconds
pub async fn next_event(rx: &mut broadcast::Receiver<TodoEvent>) -> TodoEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("broadcast channel closed")
}
