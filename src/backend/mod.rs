//! Backend Module
//!
//! This module contains all server-side code for TodoFlow: an Axum HTTP
//! server exposing a shared to-do list and pushing every committed change
//! to connected clients.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, health, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`todos`** - SQLite store and REST handlers for to-do items
//! - **`realtime`** - Event broadcasting and the server-sent event stream
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── todos/          - Store and CRUD handlers
//! ├── realtime/       - Event broadcasting
//! └── error/          - Error types
//! ```
//!
//! # Mutation Flow
//!
//! Every successful create, update or delete is committed to the store
//! first, then published on the broadcast channel as a `TodoEvent`, then
//! answered. Subscribers therefore never see an event for a change that
//! was not persisted. A failed mutation publishes nothing.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. The error maps itself to a
//! status code and a JSON body `{"error": ..., "status": ...}`; server-side
//! failures are logged with their source before the generic message is sent.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// To-do store and handlers
#[cfg(feature = "ssr")]
pub mod todos;

/// Real-time update system
#[cfg(feature = "ssr")]
pub mod realtime;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
#[cfg(feature = "ssr")]
pub use realtime::{broadcast_event, handle_event_subscription, RealtimeEventBroadcast};
#[cfg(feature = "ssr")]
pub use error::BackendError;
