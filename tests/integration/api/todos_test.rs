//! To-do endpoint tests

use assert_matches::assert_matches;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use todoflow::shared::{TodoEvent, TodoItem};
use uuid::Uuid;

use crate::common::{assert_newest_first, next_event, test_server};

#[tokio::test]
async fn test_create_then_list() {
    let (server, _state) = test_server().await;

    let response = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk", "clientId": "tab-1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: TodoItem = response.json();
    assert_eq!(created.text, "Buy milk");
    assert!(!created.completed);

    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_create_trims_text_and_honours_completed() {
    let (server, _state) = test_server().await;

    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "  Walk dog  ", "completed": true }))
        .await
        .json();

    assert_eq!(created.text, "Walk dog");
    assert!(created.completed);
}

#[tokio::test]
async fn test_response_uses_camel_case() {
    let (server, _state) = test_server().await;

    let body: Value = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk" }))
        .await
        .json();

    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
    assert!(body.get("clientId").is_none());
}

#[tokio::test]
async fn test_create_rejects_blank_text() {
    let (server, state) = test_server().await;
    let mut rx = state.realtime_broadcast.subscribe();

    for body in [json!({ "text": "   " }), json!({}), json!({ "completed": true })] {
        let response = server.post("/api/todos").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: Value = response.json();
        assert_eq!(error["error"], "Todo text is required");
        assert_eq!(error["status"], 400);
    }

    assert_matches!(rx.try_recv(), Err(_));
    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let (server, _state) = test_server().await;

    let response = server
        .post("/api/todos")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_completion_update_keeps_text() {
    let (server, _state) = test_server().await;
    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk" }))
        .await
        .json();

    let response = server
        .put(&format!("/api/todos/{}", created.id))
        .json(&json!({ "completed": true, "clientId": "tab-1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: TodoItem = response.json();
    assert!(updated.completed);
    assert_eq!(updated.text, "Buy milk");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn test_update_ignores_echoed_fields() {
    let (server, _state) = test_server().await;
    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk" }))
        .await
        .json();

    let mut echoed = serde_json::to_value(&created).unwrap();
    echoed["text"] = json!("Buy oat milk");
    echoed["id"] = json!(Uuid::new_v4());

    let updated: TodoItem = server
        .put(&format!("/api/todos/{}", created.id))
        .json(&echoed)
        .await
        .json();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "Buy oat milk");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (server, state) = test_server().await;
    let mut rx = state.realtime_broadcast.subscribe();

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = server
            .put(&format!("/api/todos/{}", id))
            .json(&json!({ "completed": true }))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let error: Value = response.json();
        assert_eq!(error["error"], "Todo not found");
    }

    assert_matches!(rx.try_recv(), Err(_));
}

#[tokio::test]
async fn test_update_rejects_blank_text() {
    let (server, _state) = test_server().await;
    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk" }))
        .await
        .json();

    let response = server
        .put(&format!("/api/todos/{}", created.id))
        .json(&json!({ "text": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    assert_eq!(listed[0].text, "Buy milk");
}

#[tokio::test]
async fn test_delete_removes_item() {
    let (server, _state) = test_server().await;
    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk" }))
        .await
        .json();

    let response = server
        .delete(&format!("/api/todos/{}", created.id))
        .add_query_param("clientId", "tab-1")
        .add_query_param("text", "Buy milk")
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_is_no_content() {
    let (server, state) = test_server().await;
    let mut rx = state.realtime_broadcast.subscribe();
    let id = Uuid::new_v4();

    let response = server.delete(&format!("/api/todos/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    // The event still goes out so every client drops any stale copy.
    assert_matches!(next_event(&mut rx).await, TodoEvent::ItemDeleted { id: got, .. } if got == id);

    let response = server.delete("/api/todos/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_matches!(rx.try_recv(), Err(_));
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let (server, _state) = test_server().await;

    for text in ["first", "second", "third"] {
        server.post("/api/todos").json(&json!({ "text": text })).await;
    }

    let listed: Vec<TodoItem> = server.get("/api/todos").await.json();
    let texts: Vec<&str> = listed.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
    assert_newest_first(&listed);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (server, _state) = test_server().await;

    let response = server.get("/api/nothing-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let error: Value = response.json();
    assert_eq!(error["error"], "Not found");
}
