//! Real-time Update Module
//!
//! This module fans committed mutations out to every connected client.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Event channel and fan-out helper
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Real-time System
//!
//! Server-Sent Events carry the one-way server → client push. Clients never
//! send anything over the stream; all mutations go through the REST API.
//!
//! # Event Types
//!
//! - `item_added` - full item plus origin token
//! - `item_updated` - full item plus origin token
//! - `item_deleted` - identifier, display text and origin token

/// Event broadcasting utilities
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, connection_count, event_channel, RealtimeEventBroadcast};
pub use subscription::handle_event_subscription;
