/**
 * To-do API Client
 *
 * Async HTTP client for the REST endpoints. Every mutation carries the
 * process's client id so the server can tag the resulting broadcast.
 */

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::shared::{CreateTodoRequest, HealthStatus, TodoItem, UpdateTodoRequest};

/// Failures of a single API call
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Thin wrapper over `reqwest::Client` bound to one server
#[derive(Debug, Clone)]
pub struct TodoApi {
    config: Config,
    client: Client,
}

impl TodoApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// `GET /api/todos`
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>, ClientError> {
        let response = self
            .client
            .get(self.config.api_url("/api/todos"))
            .send()
            .await?;
        decode(response).await
    }

    /// `POST /api/todos`
    pub async fn create_todo(&self, text: &str) -> Result<TodoItem, ClientError> {
        let body = CreateTodoRequest::new(text, self.config.client_id());
        let response = self
            .client
            .post(self.config.api_url("/api/todos"))
            .json(&body)
            .send()
            .await?;
        decode(response).await
    }

    /// `PUT /api/todos/{id}`
    ///
    /// The caller builds the partial body; its `clientId` is overwritten
    /// with this process's id.
    pub async fn update_todo(
        &self,
        id: Uuid,
        mut request: UpdateTodoRequest,
    ) -> Result<TodoItem, ClientError> {
        request.client_id = Some(self.config.client_id().to_string());
        let response = self
            .client
            .put(self.config.api_url(&format!("/api/todos/{}", id)))
            .json(&request)
            .send()
            .await?;
        decode(response).await
    }

    /// `DELETE /api/todos/{id}?clientId=&text=`
    ///
    /// `text` is only used by other clients to word their notification.
    pub async fn delete_todo(&self, id: Uuid, text: Option<&str>) -> Result<(), ClientError> {
        let mut query = vec![("clientId", self.config.client_id())];
        if let Some(text) = text {
            query.push(("text", text));
        }

        let response = self
            .client
            .delete(self.config.api_url(&format!("/api/todos/{}", id)))
            .query(&query)
            .send()
            .await?;
        check_status(response).await.map(|_| ())
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(self.config.api_url("/api/health"))
            .send()
            .await?;
        decode(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| status.to_string());

    Err(ClientError::Status { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}
