//! To-do Module
//!
//! The store schema and the REST handlers for to-do items.
//!
//! # Module Structure
//!
//! ```text
//! todos/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - SQLite pool, migrations and item queries
//! └── handlers.rs  - list/create/update/delete handlers
//! ```

/// Store access
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_todo, delete_todo, list_todos, update_todo};
