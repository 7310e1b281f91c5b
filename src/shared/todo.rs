/**
 * To-do Item Data Structures
 *
 * This module defines the persisted to-do item and the request bodies used
 * to create and update it. The types are shared between the server (store
 * rows, JSON responses) and the native client (HTTP calls, local list).
 *
 * # Out-of-band fields
 *
 * `client_id` on the request bodies is the caller's origin token. It is only
 * used to tag the broadcast that follows a write and is never persisted.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A single to-do entry as stored and as returned by the API
///
/// Serialized with camelCase keys:
/// `{id, text, completed, createdAt, updatedAt}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-generated identifier, never reused
    pub id: Uuid,
    /// Item text, never blank
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Set once when the item is inserted
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/todos`
///
/// `text` is optional at the serde level so that a missing field is reported
/// through [`CreateTodoRequest::validate`] rather than as a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Origin token, not persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Validated fields for an insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
}

impl CreateTodoRequest {
    /// Build a request from client-side input
    pub fn new(text: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: Some(false),
            client_id: Some(client_id.into()),
        }
    }

    /// Check the request and produce the fields to insert
    ///
    /// # Errors
    ///
    /// Returns a validation error when `text` is missing or blank.
    pub fn validate(&self) -> Result<NewTodo, SharedError> {
        let text = self
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| SharedError::validation("text", "Todo text is required"))?;

        Ok(NewTodo {
            text: text.to_string(),
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Body of `PUT /api/todos/{id}`
///
/// Every field is optional; absent fields keep their stored value. Unknown
/// fields are ignored, so a client may send back a whole item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Origin token, not persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Validated partial field set for an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodoRequest {
    /// Update that only flips the completion flag
    pub fn completed(completed: bool, client_id: impl Into<String>) -> Self {
        Self {
            text: None,
            completed: Some(completed),
            client_id: Some(client_id.into()),
        }
    }

    /// Update that only replaces the text
    pub fn text(text: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
            client_id: Some(client_id.into()),
        }
    }

    /// Check the request and produce the fields to merge
    ///
    /// # Errors
    ///
    /// Returns a validation error when `text` is present but blank.
    pub fn validate(&self) -> Result<TodoPatch, SharedError> {
        let text = match self.text.as_deref().map(str::trim) {
            Some("") => return Err(SharedError::validation("text", "Todo text cannot be empty")),
            Some(text) => Some(text.to_string()),
            None => None,
        };

        Ok(TodoPatch {
            text,
            completed: self.completed,
        })
    }
}

/// Query string of `DELETE /api/todos/{id}`
///
/// Both values are only used to enrich the `item_deleted` broadcast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTodoParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
