//! TodoFlow - Main Library
//!
//! TodoFlow is a shared to-do list with live updates: every client sees
//! items added, edited, completed and deleted by everyone else as soon as
//! the server commits them.
//!
//! # Module Structure
//!
//! - **`shared`** - Types used by both sides of the wire
//!   - `TodoItem` and the create/update/delete request types
//!   - `TodoEvent`, the broadcast payload
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with the REST API
//!   - SQLite store via sqlx
//!   - Broadcast channel and server-sent event stream
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - REST client and event-stream subscription
//!   - List view with filters, search, stats and toasts
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use todoflow::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```rust,no_run
//! // cargo run --bin todoflow_app
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for request validation
//! - `backend::BackendError`, rendered as a JSON error response
//! - `egui_app::ClientError` for failed API calls

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
