/**
 * To-do REST Handlers
 *
 * This module implements the four to-do endpoints. Each mutating handler
 * performs a single store write and then broadcasts the result to every
 * live event-stream connection, tagged with the caller's origin token.
 *
 * # Routes
 *
 * - `GET /api/todos` - list items, newest first
 * - `POST /api/todos` - create an item (201)
 * - `PUT /api/todos/{id}` - merge a partial update (200, 404 if unknown)
 * - `DELETE /api/todos/{id}?clientId=&text=` - remove an item (204)
 *
 * # Dependencies
 *
 * Handlers extract the store pool and the broadcast sender separately
 * through `FromRef`, so each handler names exactly what it touches.
 *
 * # Error Handling
 *
 * Store failures are logged and answered with a static 500 message.
 * Validation failures answer 400. The origin token and the delete display
 * text are never written to the store.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::realtime::{broadcast_event, RealtimeEventBroadcast};
use crate::backend::todos::db;
use crate::shared::{CreateTodoRequest, DeleteTodoParams, TodoEvent, TodoItem, UpdateTodoRequest};

/// Handle `GET /api/todos`
///
/// # Errors
///
/// * `500 Internal Server Error` - `Failed to fetch todos`
pub async fn list_todos(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<TodoItem>>, BackendError> {
    let todos = db::list_todos(&pool)
        .await
        .map_err(|e| BackendError::store("Failed to fetch todos", e))?;

    tracing::debug!("[Todos] Listed {} items", todos.len());
    Ok(Json(todos))
}

/// Handle `POST /api/todos`
///
/// Inserts the item and broadcasts `item_added` with the caller's
/// `clientId`.
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, or missing/blank `text`
/// * `500 Internal Server Error` - `Failed to add todo`
pub async fn create_todo(
    State(pool): State<SqlitePool>,
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), BackendError> {
    let Json(request) = payload?;
    let new_todo = request.validate()?;

    let todo = db::insert_todo(&pool, &new_todo)
        .await
        .map_err(|e| BackendError::store("Failed to add todo", e))?;

    tracing::info!(
        "[Todos] Added {} (origin: {})",
        todo.id,
        request.client_id.as_deref().unwrap_or("-")
    );

    broadcast_event(&broadcast_tx, TodoEvent::added(todo.clone(), request.client_id));

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Handle `PUT /api/todos/{id}`
///
/// Merges whichever of `text`/`completed` are present. Unknown body fields
/// are ignored.
///
/// # Errors
///
/// * `400 Bad Request` - malformed JSON, or `text` present but blank
/// * `404 Not Found` - no item has this identifier (nothing is broadcast)
/// * `500 Internal Server Error` - `Failed to update todo`
pub async fn update_todo(
    State(pool): State<SqlitePool>,
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoItem>, BackendError> {
    let id = parse_id(&id).ok_or_else(todo_not_found)?;
    let Json(request) = payload?;
    let patch = request.validate()?;

    let todo = db::update_todo(&pool, id, &patch)
        .await
        .map_err(|e| BackendError::store("Failed to update todo", e))?
        .ok_or_else(|| {
            tracing::info!("[Todos] Update for unknown item {}", id);
            todo_not_found()
        })?;

    tracing::info!(
        "[Todos] Updated {} (origin: {})",
        todo.id,
        request.client_id.as_deref().unwrap_or("-")
    );

    broadcast_event(&broadcast_tx, TodoEvent::updated(todo.clone(), request.client_id));

    Ok(Json(todo))
}

/// Handle `DELETE /api/todos/{id}`
///
/// Always answers 204 once the store call succeeds, whether or not the item
/// existed. A malformed identifier cannot name an item, so nothing is
/// deleted or broadcast for it.
///
/// # Errors
///
/// * `500 Internal Server Error` - `Failed to delete todo`
pub async fn delete_todo(
    State(pool): State<SqlitePool>,
    State(broadcast_tx): State<RealtimeEventBroadcast>,
    Path(id): Path<String>,
    Query(params): Query<DeleteTodoParams>,
) -> Result<StatusCode, BackendError> {
    let Some(id) = parse_id(&id) else {
        tracing::debug!("[Todos] Ignoring delete for malformed id {:?}", id);
        return Ok(StatusCode::NO_CONTENT);
    };

    let existed = db::delete_todo(&pool, id)
        .await
        .map_err(|e| BackendError::store("Failed to delete todo", e))?;

    tracing::info!(
        "[Todos] Deleted {} (existed: {}, origin: {})",
        id,
        existed,
        params.client_id.as_deref().unwrap_or("-")
    );

    broadcast_event(&broadcast_tx, TodoEvent::deleted(id, params.text, params.client_id));

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn todo_not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Todo not found")
}
