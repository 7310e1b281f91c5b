//! Broadcast fan-out tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use todoflow::shared::{TodoEvent, TodoItem};

use crate::common::{next_event, test_server};

#[tokio::test]
async fn test_item_added_carries_submitted_text() {
    let (server, state) = test_server().await;
    let mut rx = state.realtime_broadcast.subscribe();

    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Buy milk", "clientId": "tab-1" }))
        .await
        .json();

    assert_matches!(
        next_event(&mut rx).await,
        TodoEvent::ItemAdded { item, origin_id } => {
            assert_eq!(item, created);
            assert_eq!(item.text, "Buy milk");
            assert_eq!(origin_id.as_deref(), Some("tab-1"));
        }
    );
}

#[tokio::test]
async fn test_every_subscriber_sees_each_mutation() {
    let (server, state) = test_server().await;
    let mut first = state.realtime_broadcast.subscribe();
    let mut second = state.realtime_broadcast.subscribe();

    let created: TodoItem = server
        .post("/api/todos")
        .json(&json!({ "text": "Walk dog" }))
        .await
        .json();
    server
        .put(&format!("/api/todos/{}", created.id))
        .json(&json!({ "completed": true, "clientId": "tab-2" }))
        .await;
    server
        .delete(&format!("/api/todos/{}", created.id))
        .add_query_param("text", "Walk dog")
        .await;

    for rx in [&mut first, &mut second] {
        assert_eq!(next_event(rx).await.event_name(), "item_added");
        assert_matches!(
            next_event(rx).await,
            TodoEvent::ItemUpdated { item, origin_id } => {
                assert!(item.completed);
                assert_eq!(origin_id.as_deref(), Some("tab-2"));
            }
        );
        assert_matches!(
            next_event(rx).await,
            TodoEvent::ItemDeleted { id, text, origin_id: None } => {
                assert_eq!(id, created.id);
                assert_eq!(text.as_deref(), Some("Walk dog"));
            }
        );
    }
}

#[tokio::test]
async fn test_failed_mutation_broadcasts_nothing() {
    let (server, state) = test_server().await;
    let mut rx = state.realtime_broadcast.subscribe();

    server.post("/api/todos").json(&json!({ "text": "" })).await;
    server
        .put(&format!("/api/todos/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "text": "x" }))
        .await;

    assert_matches!(rx.try_recv(), Err(_));
}
