//! Subscription end-to-end tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use todoflow::egui_app::toast::ToastKind;
use todoflow::egui_app::{run_subscription, Config, SubscriptionStatus, SyncMessage, TodoApi, TodoList};
use todoflow::shared::TodoEvent;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::{timeout, Duration};

use crate::assert_ok;
use crate::common::spawn_server;

async fn next_message(rx: &mut UnboundedReceiver<SyncMessage>) -> SyncMessage {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for sync message")
        .expect("subscription ended")
}

async fn wait_connected(rx: &mut UnboundedReceiver<SyncMessage>) {
    loop {
        match next_message(rx).await {
            SyncMessage::Status(SubscriptionStatus::Connected) => return,
            SyncMessage::Status(SubscriptionStatus::Connecting) => continue,
            other => panic!("unexpected message before connect: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_other_clients_changes_arrive_with_notice() {
    let (addr, _state) = spawn_server().await;
    let url = format!("http://{}", addr);
    let watcher = assert_ok!(Config::for_server(url.clone()));
    let writer_config = assert_ok!(Config::for_server(url));
    let writer = TodoApi::new(writer_config.clone());

    let (tx, mut rx) = unbounded_channel();
    let task = tokio::spawn(run_subscription(watcher.clone(), tx));
    wait_connected(&mut rx).await;

    let created = assert_ok!(writer.create_todo("Buy milk").await);

    let event = assert_matches!(next_message(&mut rx).await, SyncMessage::Event(event) => event);
    assert_eq!(event, TodoEvent::added(created.clone(), Some(writer_config.client_id().to_string())));

    let mut list = TodoList::new();
    let notice = list.apply_event(&event, watcher.client_id()).expect("notice for remote add");
    assert_eq!(notice.kind, ToastKind::Success);
    assert_eq!(notice.message, "Someone added a new task: \"Buy milk\"");
    assert_eq!(list.items(), &[created][..]);

    task.abort();
}

#[tokio::test]
async fn test_own_echo_is_silent() {
    let (addr, _state) = spawn_server().await;
    let config = assert_ok!(Config::for_server(format!("http://{}", addr)));
    let api = TodoApi::new(config.clone());

    let (tx, mut rx) = unbounded_channel();
    let task = tokio::spawn(run_subscription(config.clone(), tx));
    wait_connected(&mut rx).await;

    let created = assert_ok!(api.create_todo("Walk dog").await);
    let mut list = TodoList::new();
    list.upsert(created.clone());

    let event = assert_matches!(next_message(&mut rx).await, SyncMessage::Event(event) => event);
    assert!(event.is_from(config.client_id()));
    assert_eq!(list.apply_event(&event, config.client_id()), None);
    assert_eq!(list.items().len(), 1);

    task.abort();
}
