//! Integration tests for TodoFlow
//!
//! - `api` - REST endpoints through `axum-test`
//! - `realtime` - broadcast fan-out and the event stream
//! - `client` - the desktop client's API and sync layers against a live server

#[path = "../common/mod.rs"]
mod common;

mod api;
mod client;
mod realtime;
