//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the native client. These types define the JSON exchanged
//! over the REST API and the event stream.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP.

/// To-do item and request bodies
pub mod todo;

/// Real-time event system
pub mod event;

/// Health report
pub mod health;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{CreateTodoRequest, DeleteTodoParams, NewTodo, TodoItem, TodoPatch, UpdateTodoRequest};
pub use event::TodoEvent;
pub use health::HealthStatus;
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
