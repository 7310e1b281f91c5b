//! egui Native Desktop Client Module
//!
//! A native window onto the shared to-do list. HTTP calls and the live
//! event stream run on a background tokio runtime; the UI thread applies
//! their results.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── config.rs       - Server URL and per-process client id
//! ├── api.rs          - REST client
//! ├── sync.rs         - Event stream subscription and SSE parsing
//! ├── todo_list.rs    - Local list, filters, stats, notification texts
//! ├── toast.rs        - Toast queue
//! ├── settings.rs     - Persisted theme preference
//! ├── state/          - Application controller
//! ├── views/          - egui rendering
//! └── theme/          - Palettes and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin todoflow_app
//! ```

pub mod config;
pub mod api;
pub mod sync;
pub mod todo_list;
pub mod toast;
pub mod settings;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use api::{ClientError, TodoApi};
pub use config::Config;
pub use settings::{Settings, Theme};
pub use state::AppState;
pub use sync::{run_subscription, SubscriptionStatus, SyncMessage};
pub use todo_list::{Filter, TodoList, TodoStats};
pub use toast::{Notice, Toast, ToastKind, ToastQueue};
