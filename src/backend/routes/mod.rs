//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, CORS and fallback
//! └── api_routes.rs   - API endpoint registration
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use todoflow::backend::routes::create_router;
//! use todoflow::backend::server::{config::load_database, AppState};
//!
//! # async fn example() -> Result<(), todoflow::backend::BackendError> {
//! let pool = load_database("sqlite::memory:").await?;
//! let router = create_router(AppState::new(pool, 1000));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint registration
pub mod api_routes;

pub use router::create_router;
