//! `TodoApi` end-to-end tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use todoflow::egui_app::{ClientError, Config, TodoApi};
use todoflow::shared::UpdateTodoRequest;

use crate::assert_ok;
use crate::common::spawn_server;

async fn api() -> TodoApi {
    let (addr, _state) = spawn_server().await;
    TodoApi::new(assert_ok!(Config::for_server(format!("http://{}", addr))))
}

#[tokio::test]
async fn test_crud_round_trip() {
    let api = api().await;

    let created = assert_ok!(api.create_todo("Buy milk").await);
    assert_eq!(created.text, "Buy milk");

    let updated = assert_ok!(
        api.update_todo(created.id, UpdateTodoRequest { completed: Some(true), ..Default::default() })
            .await
    );
    assert!(updated.completed);
    assert_eq!(updated.text, "Buy milk");

    let listed = assert_ok!(api.list_todos().await);
    assert_eq!(listed, vec![updated]);

    assert_ok!(api.delete_todo(created.id, Some("Buy milk")).await);
    assert!(assert_ok!(api.list_todos().await).is_empty());
}

#[tokio::test]
async fn test_server_errors_surface_as_status() {
    let api = api().await;

    let err = api.create_todo("   ").await.unwrap_err();
    assert_matches!(err, ClientError::Status { status, message } => {
        assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(message, "Todo text is required");
    });

    let err = api
        .update_todo(uuid::Uuid::new_v4(), UpdateTodoRequest::default())
        .await
        .unwrap_err();
    assert_matches!(err, ClientError::Status { status, .. } if status == reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let api = TodoApi::new(assert_ok!(Config::for_server("http://127.0.0.1:9")));
    assert_matches!(api.list_todos().await, Err(ClientError::Network(_)));
}

#[tokio::test]
async fn test_health() {
    let api = api().await;
    let health = assert_ok!(api.health().await);
    assert_eq!(health.status, "ok");
}
