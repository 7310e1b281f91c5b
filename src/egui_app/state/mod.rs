//! Central application state shared across egui views.
//!
//! HTTP calls and the event subscription run on a tokio runtime owned by
//! this struct. Their results come back over unbounded channels and are
//! applied on the UI thread in [`AppState::poll`], so the list is only
//! ever mutated from one place.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::egui_app::api::{ClientError, TodoApi};
use crate::egui_app::config::Config;
use crate::egui_app::settings::{Settings, Theme};
use crate::egui_app::sync::{run_subscription, SubscriptionStatus, SyncMessage};
use crate::egui_app::toast::{Notice, ToastQueue};
use crate::egui_app::todo_list::{self, Filter, TodoList};
use crate::shared::{TodoItem, UpdateTodoRequest};

/// Results of HTTP calls, sent back to the UI thread
#[derive(Debug)]
pub enum ApiResult {
    Fetched(Result<Vec<TodoItem>, ClientError>),
    Added {
        text: String,
        result: Result<TodoItem, ClientError>,
    },
    Updated {
        id: Uuid,
        completed: Option<bool>,
        text: Option<String>,
        result: Result<TodoItem, ClientError>,
    },
    Deleted {
        id: Uuid,
        text: String,
        result: Result<(), ClientError>,
    },
}

/// Text being edited in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: Uuid,
    pub text: String,
}

pub struct AppState {
    pub config: Config,
    api: TodoApi,
    runtime: Runtime,

    api_tx: UnboundedSender<ApiResult>,
    api_rx: UnboundedReceiver<ApiResult>,
    sync_rx: Option<UnboundedReceiver<SyncMessage>>,
    subscription: Option<JoinHandle<()>>,

    pub todos: TodoList,
    pub toasts: ToastQueue,
    pub filter: Filter,
    pub search: String,
    pub new_todo_text: String,
    pub editing: Option<EditState>,
    in_flight: HashSet<Uuid>,
    adding: bool,

    pub connection: SubscriptionStatus,
    ever_connected: bool,
    standard_mode_announced: bool,

    pub settings: Settings,
    settings_path: PathBuf,
}

impl AppState {
    /// Build the state; nothing touches the network until [`AppState::start`]
    pub fn new(config: Config, settings_path: PathBuf) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let settings = Settings::load_from(&settings_path).unwrap_or_else(|e| {
            tracing::warn!("[Client] Using default settings: {}", e);
            Settings::default()
        });
        let (api_tx, api_rx) = unbounded_channel();

        Ok(Self {
            api: TodoApi::new(config.clone()),
            config,
            runtime,
            api_tx,
            api_rx,
            sync_rx: None,
            subscription: None,
            todos: TodoList::new(),
            toasts: ToastQueue::new(),
            filter: Filter::All,
            search: String::new(),
            new_todo_text: String::new(),
            editing: None,
            in_flight: HashSet::new(),
            adding: false,
            connection: SubscriptionStatus::Connecting,
            ever_connected: false,
            standard_mode_announced: false,
            settings,
            settings_path,
        })
    }

    /// Open the event subscription
    ///
    /// The list is fetched once the stream is up, or once the first attempt
    /// fails and the client falls back to standard mode.
    pub fn start(&mut self) {
        if let Some(handle) = self.subscription.take() {
            handle.abort();
        }
        let (sync_tx, sync_rx) = unbounded_channel();
        self.sync_rx = Some(sync_rx);
        self.subscription = Some(self.runtime.spawn(run_subscription(self.config.clone(), sync_tx)));
        self.connection = SubscriptionStatus::Connecting;
    }

    /// True while no live stream is open; HTTP calls still work
    pub fn is_standard_mode(&self) -> bool {
        self.connection != SubscriptionStatus::Connected
    }

    /// True once the subscription task has given up
    pub fn is_disconnected(&self) -> bool {
        self.connection == SubscriptionStatus::Disconnected
    }

    /// Drain both channels and expire toasts
    pub fn poll(&mut self) {
        let mut sync_messages = Vec::new();
        if let Some(rx) = self.sync_rx.as_mut() {
            while let Ok(message) = rx.try_recv() {
                sync_messages.push(message);
            }
        }
        for message in sync_messages {
            self.handle_sync(message);
        }

        while let Ok(result) = self.api_rx.try_recv() {
            self.handle_api(result);
        }

        self.toasts.tick(Instant::now());
    }

    pub fn handle_sync(&mut self, message: SyncMessage) {
        match message {
            SyncMessage::Event(event) => {
                if let Some(notice) = self.todos.apply_event(&event, self.config.client_id()) {
                    self.toasts.push(notice);
                }
            }
            SyncMessage::Status(status) => {
                match &status {
                    SubscriptionStatus::Connected => {
                        self.ever_connected = true;
                        self.toasts.push(Notice::success("Connected to real-time updates"));
                        self.fetch_todos();
                    }
                    SubscriptionStatus::Error(reason) => {
                        tracing::debug!("[Client] Subscription error: {}", reason);
                        if !self.ever_connected && !self.standard_mode_announced {
                            self.standard_mode_announced = true;
                            self.toasts.push(Notice::warning(
                                "Using standard mode - real-time updates unavailable",
                            ));
                            self.fetch_todos();
                        }
                    }
                    _ => {}
                }
                self.connection = status;
            }
        }
    }

    pub fn handle_api(&mut self, result: ApiResult) {
        match result {
            ApiResult::Fetched(Ok(items)) => self.todos.replace_all(items),
            ApiResult::Fetched(Err(e)) => self.fail(todo_list::FETCH_FAILED, &e),

            ApiResult::Added { text, result } => {
                self.adding = false;
                match result {
                    Ok(item) => {
                        self.todos.upsert(item);
                        self.toasts.push(todo_list::added_notice(&text));
                    }
                    Err(e) => self.fail(todo_list::ADD_FAILED, &e),
                }
            }

            ApiResult::Updated {
                id,
                completed,
                text,
                result,
            } => {
                self.in_flight.remove(&id);
                match result {
                    Ok(item) => {
                        self.todos.upsert(item);
                        if let Some(notice) = todo_list::updated_notice(completed, text.as_deref()) {
                            self.toasts.push(notice);
                        }
                    }
                    Err(e) => self.fail(todo_list::UPDATE_FAILED, &e),
                }
            }

            ApiResult::Deleted { id, text, result } => {
                self.in_flight.remove(&id);
                match result {
                    Ok(()) => {
                        self.todos.remove(id);
                        self.toasts.push(todo_list::deleted_notice(&text));
                    }
                    Err(e) => self.fail(todo_list::DELETE_FAILED, &e),
                }
            }
        }
    }

    fn fail(&mut self, message: &str, error: &ClientError) {
        tracing::warn!("[Client] {} ({})", message, error);
        self.toasts.push(Notice::error(message));
    }

    pub fn fetch_todos(&self) {
        let api = self.api.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(ApiResult::Fetched(api.list_todos().await));
        });
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Submit the text in the new-item field; blank input is ignored
    pub fn submit_new_todo(&mut self) {
        let text = self.new_todo_text.trim().to_string();
        if text.is_empty() || self.adding {
            return;
        }
        self.adding = true;
        self.new_todo_text.clear();

        let api = self.api.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            let result = api.create_todo(&text).await;
            let _ = tx.send(ApiResult::Added { text, result });
        });
    }

    pub fn is_in_flight(&self, id: Uuid) -> bool {
        self.in_flight.contains(&id)
    }

    pub fn toggle_completed(&mut self, id: Uuid) {
        let Some(item) = self.todos.get(id) else {
            return;
        };
        let completed = !item.completed;
        self.send_update(id, UpdateTodoRequest::completed(completed, self.config.client_id()));
    }

    pub fn begin_edit(&mut self, id: Uuid) {
        if let Some(item) = self.todos.get(id) {
            self.editing = Some(EditState {
                id,
                text: item.text.clone(),
            });
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Send the edited text; blank or unchanged text just closes the editor
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };
        let text = edit.text.trim();
        let unchanged = self.todos.get(edit.id).map(|item| item.text == text);
        if text.is_empty() || unchanged != Some(false) {
            return;
        }
        self.send_update(edit.id, UpdateTodoRequest::text(text, self.config.client_id()));
    }

    fn send_update(&mut self, id: Uuid, request: UpdateTodoRequest) {
        if !self.in_flight.insert(id) {
            return;
        }
        let api = self.api.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            let completed = request.completed;
            let text = request.text.clone();
            let result = api.update_todo(id, request).await;
            let _ = tx.send(ApiResult::Updated {
                id,
                completed,
                text,
                result,
            });
        });
    }

    pub fn delete_todo(&mut self, id: Uuid) {
        let Some(text) = self.todos.get(id).map(|item| item.text.clone()) else {
            return;
        };
        if !self.in_flight.insert(id) {
            return;
        }
        let api = self.api.clone();
        let tx = self.api_tx.clone();
        self.runtime.spawn(async move {
            let result = api.delete_todo(id, Some(&text)).await;
            let _ = tx.send(ApiResult::Deleted { id, text, result });
        });
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Flip light/dark and persist the choice
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        if let Err(e) = self.settings.save_to(&self.settings_path) {
            tracing::warn!("[Client] Failed to save settings: {}", e);
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Some(handle) = self.subscription.take() {
            handle.abort();
        }
    }
}
