//! Real-time Sync Client
//!
//! Keeps the event stream (`GET /api/events`) open and forwards decoded
//! events to the UI thread over an unbounded channel.
//!
//! # Reconnection
//!
//! A dropped or refused connection is retried up to
//! [`MAX_RECONNECT_ATTEMPTS`] times, [`RECONNECT_DELAY`] apart. The counter
//! resets once a stream has been established. When the attempts run out the
//! task reports [`SubscriptionStatus::Disconnected`] and ends.

use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;

use crate::egui_app::config::Config;
use crate::shared::TodoEvent;

/// Reconnection attempts after a failure before giving up
pub const MAX_RECONNECT_ATTEMPTS: u32 = 5;

/// Pause between reconnection attempts
pub const RECONNECT_DELAY: Duration = Duration::from_secs(1);

const CONNECTED_EVENT: &str = "connected";

/// Subscription status reported by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Connecting,
    Connected,
    Retrying,
    Error(String),
    Disconnected,
}

/// Messages from the subscription task to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SyncMessage {
    Status(SubscriptionStatus),
    Event(TodoEvent),
}

/// One dispatched server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    pub event: Option<String>,
    pub data: String,
}

/// Incremental `text/event-stream` parser
///
/// Bytes are buffered until a full line is available, so frames and UTF-8
/// sequences may be split across network chunks.
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and collect every frame it completes
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw[..raw.len() - 1]);
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.is_empty() {
                if let Some(frame) = self.dispatch() {
                    frames.push(frame);
                }
                continue;
            }
            if line.starts_with(':') {
                continue;
            }

            let (field, value) = match line.split_once(':') {
                Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
                None => (line, ""),
            };
            match field {
                "event" => self.event = Some(value.to_string()),
                "data" => self.data.push(value.to_string()),
                _ => {}
            }
        }
        frames
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let event = self.event.take();
        if self.data.is_empty() {
            return None;
        }
        let data = std::mem::take(&mut self.data).join("\n");
        Some(SseFrame { event, data })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectedPayload {
    client_id: Option<String>,
}

/// Outcome of one connection attempt
enum StreamEnd {
    /// The stream was established and later ended
    Lost,
    /// The attempt failed before a stream was established
    Failed(String),
    /// The UI side went away
    ReceiverGone,
}

/// Run the subscription until reconnection attempts are exhausted or the
/// receiving side is dropped
pub async fn run_subscription(config: Config, tx: UnboundedSender<SyncMessage>) {
    let client = Client::new();
    let url = config.api_url("/api/events");
    let mut attempts = 0;

    loop {
        if tx.send(SyncMessage::Status(SubscriptionStatus::Connecting)).is_err() {
            return;
        }

        tracing::info!("[Client] Subscribing to {}", url);
        match read_stream(&client, &url, config.client_id(), &tx).await {
            StreamEnd::ReceiverGone => return,
            StreamEnd::Lost => {
                tracing::warn!("[Client] Event stream lost");
                attempts = 0;
            }
            StreamEnd::Failed(reason) => {
                tracing::warn!("[Client] Event stream unavailable: {}", reason);
                if tx.send(SyncMessage::Status(SubscriptionStatus::Error(reason))).is_err() {
                    return;
                }
            }
        }

        if attempts >= MAX_RECONNECT_ATTEMPTS {
            tracing::warn!("[Client] Giving up after {} reconnection attempts", attempts);
            let _ = tx.send(SyncMessage::Status(SubscriptionStatus::Disconnected));
            return;
        }
        attempts += 1;

        if tx.send(SyncMessage::Status(SubscriptionStatus::Retrying)).is_err() {
            return;
        }
        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

async fn read_stream(
    client: &Client,
    url: &str,
    client_id: &str,
    tx: &UnboundedSender<SyncMessage>,
) -> StreamEnd {
    let response = match client
        .get(url)
        .query(&[("clientId", client_id)])
        .header("Accept", "text/event-stream")
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => return StreamEnd::Failed(format!("network: {}", e)),
    };

    if !response.status().is_success() {
        return StreamEnd::Failed(format!("http: {}", response.status()));
    }

    let mut parser = SseParser::new();
    let mut established = false;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("[Client] Error reading event stream: {}", e);
                break;
            }
        };

        for frame in parser.feed(&chunk) {
            let message = match frame.event.as_deref() {
                Some(CONNECTED_EVENT) => {
                    if let Ok(payload) = serde_json::from_str::<ConnectedPayload>(&frame.data) {
                        tracing::debug!("[Client] Server acknowledged {:?}", payload.client_id);
                    }
                    established = true;
                    SyncMessage::Status(SubscriptionStatus::Connected)
                }
                _ => match serde_json::from_str::<TodoEvent>(&frame.data) {
                    Ok(event) => SyncMessage::Event(event),
                    Err(e) => {
                        tracing::warn!("[Client] Ignoring undecodable event: {}", e);
                        continue;
                    }
                },
            };
            if tx.send(message).is_err() {
                return StreamEnd::ReceiverGone;
            }
        }
    }

    if established {
        StreamEnd::Lost
    } else {
        StreamEnd::Failed("stream closed before greeting".to_string())
    }
}
