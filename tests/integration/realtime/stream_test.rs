//! Event stream tests over a real listener

use chrono::Utc;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::Value;
use todoflow::backend::realtime::broadcast_event;
use todoflow::egui_app::sync::{SseFrame, SseParser};
use todoflow::shared::{TodoEvent, TodoItem};
use tokio::time::{sleep, timeout, Duration};
use uuid::Uuid;

use crate::common::{spawn_server, spawn_server_with_capacity};

/// Read frames until `count` have arrived
async fn read_frames(response: reqwest::Response, count: usize) -> Vec<SseFrame> {
    let mut parser = SseParser::new();
    let mut frames = Vec::new();
    let mut stream = response.bytes_stream();

    timeout(Duration::from_secs(5), async {
        while frames.len() < count {
            let chunk = stream.next().await.expect("stream ended").expect("chunk");
            frames.extend(parser.feed(&chunk));
        }
    })
    .await
    .expect("timed out reading event stream");

    frames
}

#[tokio::test]
async fn test_stream_greets_then_forwards_events() {
    let (addr, state) = spawn_server().await;
    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/events", base))
        .query(&[("clientId", "tab-1")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/event-stream"
    );

    // The greeting is queued before the handler returns, so the receiver
    // already exists once headers arrive.
    assert_eq!(state.realtime_broadcast.receiver_count(), 1);

    let created: TodoItem = client
        .post(format!("{}/api/todos", base))
        .json(&serde_json::json!({ "text": "Buy milk", "clientId": "tab-2" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let frames = read_frames(response, 2).await;

    assert_eq!(frames[0].event.as_deref(), Some("connected"));
    let greeting: Value = serde_json::from_str(&frames[0].data).unwrap();
    assert_eq!(greeting["clientId"], "tab-1");
    assert!(greeting["serverTime"].is_string());

    assert_eq!(frames[1].event.as_deref(), Some("item_added"));
    let event: TodoEvent = serde_json::from_str(&frames[1].data).unwrap();
    assert_eq!(event, TodoEvent::added(created, Some("tab-2".to_string())));
}

#[tokio::test]
async fn test_closing_stream_lowers_connection_count() {
    let (addr, state) = spawn_server().await;

    let response = reqwest::get(format!("http://{}/api/events", addr)).await.unwrap();
    assert_eq!(state.realtime_broadcast.receiver_count(), 1);
    drop(response);

    // Worst case the next keep-alive write notices the closed socket.
    timeout(Duration::from_secs(20), async {
        while state.realtime_broadcast.receiver_count() > 0 {
            sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("receiver was not released");
}

/// Keeps one event stream open across several reads
struct FrameReader {
    stream: BoxStream<'static, reqwest::Result<Vec<u8>>>,
    parser: SseParser,
    pending: Vec<SseFrame>,
}

impl FrameReader {
    fn new(response: reqwest::Response) -> Self {
        Self {
            stream: response.bytes_stream().map(|chunk| chunk.map(|b| b.to_vec())).boxed(),
            parser: SseParser::new(),
            pending: Vec::new(),
        }
    }

    async fn next_frame(&mut self) -> SseFrame {
        timeout(Duration::from_secs(5), async {
            while self.pending.is_empty() {
                let chunk = self.stream.next().await.expect("stream ended").expect("chunk");
                self.pending.extend(self.parser.feed(&chunk));
            }
        })
        .await
        .expect("timed out reading event stream");
        self.pending.remove(0)
    }
}

fn todo(text: &str) -> TodoItem {
    let now = Utc::now();
    TodoItem {
        id: Uuid::new_v4(),
        text: text.to_string(),
        completed: false,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_lagging_subscriber_skips_missed_events_and_stays_open() {
    let (addr, state) = spawn_server_with_capacity(1).await;
    let response = reqwest::get(format!("http://{}/api/events?clientId=slow", addr))
        .await
        .unwrap();
    let mut reader = FrameReader::new(response);

    assert_eq!(reader.next_frame().await.event.as_deref(), Some("connected"));

    // The current-thread runtime cannot run the server task between these
    // sends, so the receiver falls behind a channel that holds one event.
    for n in 0..4 {
        broadcast_event(&state.realtime_broadcast, TodoEvent::added(todo(&format!("stale {}", n)), None));
    }
    let newest = todo("newest");
    broadcast_event(&state.realtime_broadcast, TodoEvent::added(newest.clone(), None));

    let frame = reader.next_frame().await;
    assert_eq!(frame.event.as_deref(), Some("item_added"));
    let event: TodoEvent = serde_json::from_str(&frame.data).unwrap();
    assert_eq!(event, TodoEvent::added(newest, None));

    assert_eq!(state.realtime_broadcast.receiver_count(), 1);

    let later = todo("later");
    broadcast_event(&state.realtime_broadcast, TodoEvent::added(later.clone(), Some("tab-9".to_string())));

    let frame = reader.next_frame().await;
    assert_eq!(frame.event.as_deref(), Some("item_added"));
    let event: TodoEvent = serde_json::from_str(&frame.data).unwrap();
    assert_eq!(event, TodoEvent::added(later, Some("tab-9".to_string())));
}
