//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and store loading
//! ├── health.rs       - Health endpoint
//! └── init.rs         - Application assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store**: open the SQLite pool, run migrations
//! 3. **State Creation**: pool + broadcast channel
//! 4. **Router Creation**: routes, CORS, fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use todoflow::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), todoflow::backend::BackendError> {
//! let config = ServerConfig::from_env();
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Health endpoint
pub mod health;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
