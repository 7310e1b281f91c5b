/**
 * Real-time Event System
 *
 * This module defines the events broadcast to every connected client after a
 * mutation has been committed to the store. Each event carries the origin
 * token of the client that triggered it so that client can recognise its own
 * echo.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::todo::TodoItem;

/// A committed mutation, pushed to all live connections
///
/// Serialized with a `type` tag (`item_added`, `item_updated`,
/// `item_deleted`) and camelCase fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum TodoEvent {
    /// An item was created
    ItemAdded {
        item: TodoItem,
        origin_id: Option<String>,
    },
    /// An item was merged with a partial update
    ItemUpdated {
        item: TodoItem,
        origin_id: Option<String>,
    },
    /// An item was removed
    ///
    /// `text` is whatever display text the deleting client supplied.
    ItemDeleted {
        id: Uuid,
        text: Option<String>,
        origin_id: Option<String>,
    },
}

impl TodoEvent {
    pub fn added(item: TodoItem, origin_id: Option<String>) -> Self {
        Self::ItemAdded { item, origin_id }
    }

    pub fn updated(item: TodoItem, origin_id: Option<String>) -> Self {
        Self::ItemUpdated { item, origin_id }
    }

    pub fn deleted(id: Uuid, text: Option<String>, origin_id: Option<String>) -> Self {
        Self::ItemDeleted { id, text, origin_id }
    }

    /// Wire name of the event, also used as the SSE event name
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "item_added",
            Self::ItemUpdated { .. } => "item_updated",
            Self::ItemDeleted { .. } => "item_deleted",
        }
    }

    /// Origin token of the client that triggered the mutation
    pub fn origin_id(&self) -> Option<&str> {
        match self {
            Self::ItemAdded { origin_id, .. }
            | Self::ItemUpdated { origin_id, .. }
            | Self::ItemDeleted { origin_id, .. } => origin_id.as_deref(),
        }
    }

    /// Whether the event was triggered by `client_id`
    pub fn is_from(&self, client_id: &str) -> bool {
        self.origin_id() == Some(client_id)
    }

    /// Identifier of the affected item
    pub fn item_id(&self) -> Uuid {
        match self {
            Self::ItemAdded { item, .. } | Self::ItemUpdated { item, .. } => item.id,
            Self::ItemDeleted { id, .. } => *id,
        }
    }
}
