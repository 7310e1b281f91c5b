//! Client-side to-do list
//!
//! Holds the local copy of the shared list and applies server results and
//! broadcast events to it. Applying the same item twice is harmless: adds
//! and updates are upserts by id and deletes are removals by id, so the
//! client can apply both its own HTTP responses and the echo of its own
//! mutations without duplicates.

use std::fmt;

use uuid::Uuid;

use crate::egui_app::toast::Notice;
use crate::shared::{TodoEvent, TodoItem};

/// Which items the list view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts over the whole list, regardless of filter and search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

/// Items ordered newest first, like the server's listing
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Replace the list with a fresh server listing
    pub fn replace_all(&mut self, mut items: Vec<TodoItem>) {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.items = items;
    }

    /// Insert or replace by id, keeping newest-first order
    pub fn upsert(&mut self, item: TodoItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
            return;
        }
        let pos = self
            .items
            .iter()
            .position(|i| i.created_at <= item.created_at)
            .unwrap_or(self.items.len());
        self.items.insert(pos, item);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<TodoItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Apply a broadcast event
    ///
    /// Returns the notification to show, which is only produced for events
    /// another client caused. The caller already announced its own mutations
    /// when their HTTP response arrived.
    pub fn apply_event(&mut self, event: &TodoEvent, own_client_id: &str) -> Option<Notice> {
        let notice = match event {
            TodoEvent::ItemAdded { item, .. } => {
                self.upsert(item.clone());
                Notice::success(format!("Someone added a new task: \"{}\"", item.text))
            }
            TodoEvent::ItemUpdated { item, .. } => {
                self.upsert(item.clone());
                if item.completed {
                    Notice::info(format!("Someone completed the task: \"{}\"", item.text))
                } else {
                    Notice::info(format!("Someone updated the task: \"{}\"", item.text))
                }
            }
            TodoEvent::ItemDeleted { id, text, .. } => {
                self.remove(*id);
                match text.as_deref() {
                    Some(text) if !text.is_empty() => {
                        Notice::warning(format!("Someone deleted a task: \"{}\"", text))
                    }
                    _ => Notice::warning("Someone deleted a task"),
                }
            }
        };

        (!event.is_from(own_client_id)).then_some(notice)
    }

    pub fn stats(&self) -> TodoStats {
        let completed = self.items.iter().filter(|item| item.completed).count();
        TodoStats {
            all: self.items.len(),
            active: self.items.len() - completed,
            completed,
        }
    }

    /// Items passing `filter` whose text contains `search`, ignoring case
    pub fn visible(&self, filter: Filter, search: &str) -> Vec<&TodoItem> {
        let needle = search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .filter(|item| needle.is_empty() || item.text.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Notification for this client's own successful create
pub fn added_notice(text: &str) -> Notice {
    Notice::success(format!("TODO added: \"{}\"", text))
}

/// Notification for this client's own successful update
///
/// A completion change wins over a text change, matching what the user
/// just clicked.
pub fn updated_notice(completed: Option<bool>, text: Option<&str>) -> Option<Notice> {
    match (completed, text) {
        (Some(true), _) => Some(Notice::info("TODO marked as completed")),
        (Some(false), _) => Some(Notice::info("TODO marked as active")),
        (None, Some(text)) => Some(Notice::info(format!("TODO updated to: \"{}\"", text))),
        (None, None) => None,
    }
}

/// Notification for this client's own successful delete
pub fn deleted_notice(text: &str) -> Notice {
    Notice::warning(format!("TODO deleted: \"{}\"", text))
}

pub const FETCH_FAILED: &str = "Failed to fetch tasks. Please try again.";
pub const ADD_FAILED: &str = "Failed to add task. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update TODO. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete TODO. Please try again.";

/// Placeholder shown when nothing passes the filter and search
pub fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No tasks found".to_string(),
        _ => format!("No {} tasks found", filter),
    }
}
